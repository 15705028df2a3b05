pub mod config;
pub mod convert;
pub mod emit;
pub mod error;
pub mod image;
pub mod parse;

pub use config::{ConvertConfig, FillByte, WORD_SIZE};
pub use convert::{ConversionSummary, Converter};
pub use error::ConvertError;
pub use image::MemoryImage;
