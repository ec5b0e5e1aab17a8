//! Read-only access to the structured value a rule expression arrives in.
//! The compiler works against this trait rather than a concrete JSON library;
//! any decoder that can expose length, indexed access, and scalar reads fits.

use serde_json::Value;

pub trait ValueReader {
    /// Number of elements if this value is a sequence.
    fn seq_len(&self) -> Option<usize>;

    /// The i-th element of a sequence, usable recursively.
    fn at_index(&self, index: usize) -> Option<&Self>;

    /// This value as a string.
    fn read_string(&self) -> Option<&str>;

    /// This value captured verbatim as an untyped scalar. Only used for the
    /// right-hand side of `=` rules.
    fn read_data(&self) -> Option<Value>;
}

impl ValueReader for Value {
    fn seq_len(&self) -> Option<usize> { self.as_array().map(Vec::len) }

    fn at_index(&self, index: usize) -> Option<&Self> { self.as_array()?.get(index) }

    fn read_string(&self) -> Option<&str> { self.as_str() }

    fn read_data(&self) -> Option<Value> { Some(self.clone()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_access() {
        let value = json!(["is", "available"]);
        assert_eq!(value.seq_len(), Some(2));
        assert_eq!(value.at_index(0).and_then(ValueReader::read_string), Some("is"));
        assert_eq!(value.at_index(2), None);
    }

    #[test]
    fn test_non_sequence() {
        assert_eq!(json!("is").seq_len(), None);
        assert_eq!(json!(42).at_index(0), None);
        assert_eq!(json!(42).read_string(), None);
    }

    #[test]
    fn test_read_data_is_verbatim() {
        assert_eq!(json!(1927).read_data(), Some(json!(1927)));
        assert_eq!(json!("1927").read_data(), Some(json!("1927")));
        assert_eq!(json!(null).read_data(), Some(json!(null)));
    }
}
