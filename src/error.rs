use thiserror::Error;

#[cfg(feature = "wasm")]
use wasm_bindgen;

/// Errors raised while compiling a rule expression. Compilation front-loads
/// all validation; once a `Predicate` exists, evaluation cannot fail.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    #[error("rule of length {0} is too short to hold an operator and an operand")]
    InvalidShape(usize),
    #[error("couldn't read the rule operator as a string")]
    InvalidOperator,
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("invalid '{0}' rule")]
    InvalidRule(String),
    #[error("error compiling '{operator}' rule at operand {index}: {source}")]
    InvalidChild {
        operator: &'static str,
        index: usize,
        #[source]
        source: Box<CompileError>,
    },
    #[error("syntax error: {0}")]
    Syntax(String),
}

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self { CompileError::Syntax(err.to_string()) }
}

#[cfg(feature = "wasm")]
impl From<CompileError> for wasm_bindgen::JsValue {
    fn from(error: CompileError) -> Self { wasm_bindgen::JsValue::from_str(&error.to_string()) }
}
