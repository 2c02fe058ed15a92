use thiserror::Error;

/// A casing strategy name outside the fixed set of five.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported case strategy '{0}', expected one of: pascal, camel, kebab, snake, space")]
pub struct UnsupportedCaseError(pub String);
