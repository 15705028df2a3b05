use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Bytes per emitted word line.
pub const WORD_SIZE: usize = 4;

/// Byte used to pad address gaps and the trailing short word.
///
/// Always two hex digits, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FillByte(String);

impl FillByte {
    pub fn new(value: &str) -> Result<Self, ConvertError> {
        if value.len() != 2 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConvertError::InvalidFillByte { value: value.to_string() });
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FillByte {
    fn default() -> Self {
        Self("00".to_string())
    }
}

impl fmt::Display for FillByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FillByte {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FillByte {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<FillByte> for String {
    fn from(fill: FillByte) -> Self {
        fill.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub fill: FillByte,
}

impl ConvertConfig {
    pub fn with_fill(fill: FillByte) -> Self {
        Self { fill }
    }
}
