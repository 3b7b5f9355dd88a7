//! CLI subcommand implementations.

pub mod fetch;
pub mod inspect_error;
pub mod paginate;
pub mod param;
