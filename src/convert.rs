use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{ConvertConfig, FillByte, WORD_SIZE};
use crate::emit;
use crate::error::ConvertError;
use crate::image::MemoryImage;
use crate::parse;

/// Outcome of one conversion, suitable for `--summary` JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionSummary {
    /// Image length before the trailing word is padded.
    pub tokens: usize,
    pub words: usize,
    pub fill_inserted: u64,
    pub directives: usize,
    pub skipped_directives: usize,
    pub cursor: u64,
    pub fill: FillByte,
}

impl ConversionSummary {
    fn new(img: &MemoryImage, fill: &FillByte) -> Self {
        let stats = img.stats();
        Self {
            tokens: img.len(),
            words: img.len().div_ceil(WORD_SIZE),
            fill_inserted: stats.fill_inserted,
            directives: stats.directives,
            skipped_directives: stats.skipped_directives,
            cursor: img.cursor(),
            fill: fill.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Converter {
    cfg: ConvertConfig,
}

impl Converter {
    pub fn new(cfg: ConvertConfig) -> Self {
        Self { cfg }
    }

    pub fn build_image(&self, input: &str) -> Result<MemoryImage, ConvertError> {
        MemoryImage::from_lines(parse::lines(input), &self.cfg.fill)
    }

    /// Converts dump text into the word image text.
    pub fn convert_str(&self, input: &str) -> Result<(String, ConversionSummary), ConvertError> {
        let img = self.build_image(input)?;
        let out = emit::render(img.tokens(), &self.cfg.fill);
        Ok((out, ConversionSummary::new(&img, &self.cfg.fill)))
    }

    /// Reads `input`, converts it, and writes the word image to `output`.
    ///
    /// The output file is only created once the whole input has been parsed.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConversionSummary> {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("failed to read input file {}", input.display()))?;
        let img = self
            .build_image(&text)
            .with_context(|| format!("failed to parse {}", input.display()))?;

        let file = File::create(output)
            .with_context(|| format!("failed to create output file {}", output.display()))?;
        let mut out = BufWriter::new(file);
        let words = emit::write_image(&mut out, img.tokens(), &self.cfg.fill)
            .and_then(|n| out.flush().map(|()| n))
            .with_context(|| format!("failed to write {}", output.display()))?;

        let summary = ConversionSummary::new(&img, &self.cfg.fill);
        debug_assert_eq!(words, summary.words);
        info!(
            input = %input.display(),
            output = %output.display(),
            tokens = summary.tokens,
            words = summary.words,
            fill_inserted = summary.fill_inserted,
            "converted memory dump"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_words_and_fill() {
        let conv = Converter::default();
        let (out, summary) = conv.convert_str("@0\n11 22 33 44\n@8\naa bb\n").unwrap();
        assert_eq!(out, "@0\n44332211\n00000000\n0000bbaa\n");
        assert_eq!(summary.tokens, 10);
        assert_eq!(summary.words, 3);
        assert_eq!(summary.fill_inserted, 4);
        assert_eq!(summary.directives, 2);
        assert_eq!(summary.cursor, 10);
        assert_eq!(summary.fill.as_str(), "00");
    }

    #[test]
    fn crlf_input_is_trimmed() {
        let conv = Converter::default();
        let (out, _) = conv.convert_str("@4\r\nde ad be ef\r\n").unwrap();
        assert_eq!(out, "@0\n00000000\nefbeadde\n");
    }

    #[test]
    fn lone_cr_separates_lines() {
        let conv = Converter::default();
        let (out, _) = conv.convert_str("11 22\r@8\raa bb\r").unwrap();
        assert_eq!(out, "@0\n00002211\n00000000\n0000bbaa\n");
    }

    #[test]
    fn summary_serializes_fill_as_string() {
        let conv = Converter::new(ConvertConfig::with_fill(FillByte::new("FF").unwrap()));
        let (_, summary) = conv.convert_str("01").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["fill"], "ff");
        assert_eq!(json["words"], 1);
    }
}
