#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    #[error("invalid fill byte {value:?}: expected two hex digits")]
    InvalidFillByte { value: String },
    #[error("address @{digits} on line {line} does not fit in 64 bits")]
    AddressOverflow { line: usize, digits: String },
    #[error("image cannot grow to address {addr:#x}")]
    ImageTooLarge { addr: u64 },
}
