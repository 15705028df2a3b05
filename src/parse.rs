use crate::error::ConvertError;

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// `@<hex>` directive; `None` when no hex run follows any `@`.
    Address(Option<u64>),
    Data(Vec<&'a str>),
}

/// Splits dump text on `\n`, `\r\n` and lone `\r`.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                let line = &rest[..i];
                let sep = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + sep..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

pub fn classify(line_no: usize, line: &str) -> Result<Line<'_>, ConvertError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Line::Blank);
    }
    if line.starts_with('@') {
        return Ok(Line::Address(directive_address(line_no, line)?));
    }
    Ok(Line::Data(line.split_whitespace().collect()))
}

/// Finds the first `@` immediately followed by hex digits and parses that run.
pub fn directive_address(line_no: usize, line: &str) -> Result<Option<u64>, ConvertError> {
    let bytes = line.as_bytes();
    for (at, _) in line.match_indices('@') {
        let start = at + 1;
        let len = bytes[start..].iter().take_while(|b| b.is_ascii_hexdigit()).count();
        if len == 0 {
            continue;
        }
        let digits = &line[start..start + len];
        return u64::from_str_radix(digits, 16)
            .map(Some)
            .map_err(|_| ConvertError::AddressOverflow { line: line_no, digits: digits.to_string() });
    }
    Ok(None)
}
