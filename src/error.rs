use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid color code: {0:?}")]
    InvalidColor(String),

    #[error("invalid table: {0}")]
    InvalidTable(String),
}
