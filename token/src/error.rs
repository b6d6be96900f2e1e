use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenErrorCode {
    // transfer
    InsufficientBalance,
    // initialization
    InvalidMetadata,
}

impl TokenErrorCode {
    pub fn to_u16(&self) -> u16 {
        match self {
            TokenErrorCode::InsufficientBalance => 0,
            TokenErrorCode::InvalidMetadata => 1,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TokenError {
    code: u16,
    message: String,
}

impl TokenError {
    pub fn new(code: TokenErrorCode, message: &str) -> TokenError {
        TokenError {
            code: code.to_u16(),
            message: message.to_string(),
        }
    }

    // callers match on this exact text, don't change it
    pub fn insufficient_balance() -> TokenError {
        TokenError::new(TokenErrorCode::InsufficientBalance, "Not enough tokens")
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // consumes self
    // typical usage:
    // TokenError::new(TokenErrorCode::InvalidMetadata, "Name cannot be empty").into_err()
    pub fn into_err<S>(self) -> Result<S, TokenError> {
        Err(self)
    }
}
