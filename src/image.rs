use tracing::{debug, trace, warn};

use crate::config::FillByte;
use crate::error::ConvertError;
use crate::parse::{classify, Line};

/// Counters gathered while the image is assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageStats {
    pub directives: usize,
    pub skipped_directives: usize,
    pub fill_inserted: u64,
}

/// Flat byte image built from a sparse dump.
///
/// Tokens are only ever appended. The cursor follows directives and data rows,
/// so after a backward `@` it can sit below `len()`; nothing is truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryImage {
    tokens: Vec<String>,
    cursor: u64,
    stats: ImageStats,
}

impl MemoryImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an image from every line of `lines` (numbered from 1).
    pub fn from_lines<'a, I>(lines: I, fill: &FillByte) -> Result<Self, ConvertError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut img = Self::new();
        for (idx, line) in lines.into_iter().enumerate() {
            img.apply(idx + 1, line, fill)?;
        }
        Ok(img)
    }

    pub fn apply(&mut self, line_no: usize, line: &str, fill: &FillByte) -> Result<(), ConvertError> {
        match classify(line_no, line)? {
            Line::Blank => {}
            Line::Address(Some(target)) => {
                let inserted = self.jump(target, fill)?;
                debug!(line = line_no, addr = target, inserted, "address directive");
            }
            Line::Address(None) => {
                self.stats.skipped_directives += 1;
                warn!(line = line_no, text = line.trim(), "directive without hex address ignored");
            }
            Line::Data(tokens) => {
                trace!(line = line_no, count = tokens.len(), "data row");
                self.push_row(tokens)?;
            }
        }
        Ok(())
    }

    /// Moves the cursor to `target`, filling any forward gap. Returns the fill count.
    ///
    /// A gap that cannot be allocated leaves the image untouched.
    pub fn jump(&mut self, target: u64, fill: &FillByte) -> Result<u64, ConvertError> {
        let gap = target.saturating_sub(self.cursor);
        if gap > 0 {
            let too_large = || ConvertError::ImageTooLarge { addr: target };
            let extra = usize::try_from(gap).map_err(|_| too_large())?;
            let new_len = self.tokens.len().checked_add(extra).ok_or_else(too_large)?;
            self.tokens.try_reserve_exact(extra).map_err(|_| too_large())?;
            self.tokens.resize(new_len, fill.as_str().to_string());
            self.stats.fill_inserted += gap;
        }
        self.stats.directives += 1;
        self.cursor = target;
        Ok(gap)
    }

    pub fn push_row<S: Into<String>>(
        &mut self,
        tokens: impl IntoIterator<Item = S>,
    ) -> Result<(), ConvertError> {
        let row: Vec<String> = tokens.into_iter().map(Into::into).collect();
        self.cursor = self
            .cursor
            .checked_add(row.len() as u64)
            .ok_or(ConvertError::ImageTooLarge { addr: self.cursor })?;
        self.tokens.extend(row);
        Ok(())
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn stats(&self) -> ImageStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
