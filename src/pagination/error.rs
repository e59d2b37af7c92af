use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Limit cannot exceed {max}")]
    LimitTooLarge { max: u32 },

    #[error("Limit must be at least {min}")]
    LimitTooSmall { min: u32 },

    #[error("Cursor encoding error: {0}")]
    CursorEncoding(#[from] serde_json::Error),
}
