use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsmError {
    #[error("pixel row has {0} symbols, expected 4")]
    InvalidRow(usize),

    #[error("invalid pixel symbol '{0}' at position {1}")]
    InvalidSymbol(char, usize),

    #[error("character set has {0} rows, at most 1024 are allowed")]
    TooManyRows(usize),

    #[error("no pixel rows to encode")]
    EmptyInput,

    #[error("unknown orientation letter '{0}', expected one of n, h, v")]
    InvalidOrientation(char),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
