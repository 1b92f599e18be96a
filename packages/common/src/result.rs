use crate::error::TokenError;

/// Common Result type alias
pub type TokenResult<T> = Result<T, TokenError>;
