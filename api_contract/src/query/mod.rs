mod param;
pub use self::param::{normalize_param, param_from_url, ParamValue};
