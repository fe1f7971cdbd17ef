use crate::error::GenerateError;

/// Common Result type alias
pub type CommonResult<T> = Result<T, GenerateError>;
