mod meta;
pub use self::meta::{ApiResponse, Meta};

mod error;
pub use self::error::{ApiError, ErrorData, FieldErrors, StatusCode};
