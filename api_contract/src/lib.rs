//! Shared API response/error shapes, request parameter normalization, and a
//! small typed client that speaks those shapes.

mod client;
mod decode;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::decode::{decode_error, decode_response};
pub use self::errors::Error;
pub use self::query::{normalize_param, param_from_url, ParamValue};
