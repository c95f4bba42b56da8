use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarAiError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No images found: {0}")]
    NoImagesFound(String),

    #[error("Image load error: {0}")]
    ImageLoad(String),

    #[error("{0}")]
    Validation(String),

    /// No response reached the service at all.
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status, message classified by status.
    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("Failed to parse analysis response: {0}")]
    ApiParse(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    PdfGeneration(String),
}

pub type Result<T> = std::result::Result<T, CarAiError>;
