use crate::ast::Predicate;
use crate::compiler::compile_predicate;
use crate::error::CompileError;
use serde_json::Value;
use std::convert::TryFrom;

impl TryFrom<&Value> for Predicate {
    type Error = CompileError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> { compile_predicate(value) }
}

impl<'a> TryFrom<&'a str> for Predicate {
    type Error = CompileError;

    fn try_from(text: &'a str) -> Result<Self, Self::Error> {
        let value: Value = serde_json::from_str(text)?;
        compile_predicate(&value)
    }
}

impl TryFrom<String> for Predicate {
    type Error = CompileError;

    fn try_from(text: String) -> Result<Self, Self::Error> { Predicate::try_from(text.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_text() {
        let pred = Predicate::try_from(r#"["all", ["is", "available"], ["not", "movie"]]"#).unwrap();
        assert_eq!(
            pred,
            Predicate::All(vec![
                Predicate::Is { property: "available".into() },
                Predicate::Not { property: "movie".into() },
            ])
        );

        let pred = Predicate::try_from(String::from(r#"["is", "available"]"#)).unwrap();
        assert_eq!(pred, Predicate::Is { property: "available".into() });
    }

    #[test]
    fn test_try_from_rejects_bad_json() {
        let err = Predicate::try_from(r#"["is", "available""#).unwrap_err();
        assert!(matches!(err, CompileError::Syntax(_)), "expected syntax error, got {err:?}");
    }

    #[test]
    fn test_try_from_rejects_bad_rules() {
        let err = Predicate::try_from(r#"{"is": "available"}"#).unwrap_err();
        assert_eq!(err, CompileError::InvalidShape(0));
    }
}
