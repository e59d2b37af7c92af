pub mod cursor;
pub mod error;
pub mod keyset;
pub mod types;

pub use cursor::KeysetPosition;
pub use error::PaginationError;
pub use keyset::Keyset;
pub use types::{Page, PageRequest, SortDirection, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
