use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Reason an expression was turned away by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("the expression is empty")]
    Empty,
    #[error("unrecognized token '{0}'")]
    UnknownToken(String),
    #[error("{found} distinct variables, at most {max} are supported")]
    TooManyVariables { found: usize, max: usize },
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,
    #[error("nested {depth} levels deep, at most {max} are supported")]
    TooDeep { depth: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rejected by the validator before any parsing took place.
    #[error("invalid expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: Reason },
    /// The token sequence does not match the expression grammar.
    #[error("cannot parse '{expression}': {message}")]
    Parse { expression: String, message: String },
}

impl Error {
    pub fn expression(&self) -> &str {
        match self {
            Self::InvalidExpression { expression, .. } | Self::Parse { expression, .. } => {
                expression
            }
        }
    }

    /// The message shown to a user, identical for both error kinds.
    pub fn user_message(&self) -> String {
        format!(
            "The boolean expression '{}' is invalid.\n\nPlease enter a valid boolean expression and try again.",
            self.expression().trim()
        )
    }
}
