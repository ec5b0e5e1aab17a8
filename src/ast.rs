use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A compiled boolean rule, evaluated against property-bearing objects.
///
/// The variant set is closed: rules are built from exactly these six forms,
/// and a tree is immutable once compiled. `All`/`Any` children are non-empty
/// by construction (the compiler rejects bare `["all"]`/`["any"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// `["is", prop]` — property is exactly boolean true.
    Is { property: String },
    /// `["not", prop]` — property is boolean false, null, or absent.
    Not { property: String },
    /// `["=", prop, value]` — property equals the captured value, type-sensitively.
    Equals { property: String, value: Value },
    /// `["contains", prop, substr]` — case-insensitive substring match.
    /// The substring is lower-cased at compile time.
    Contains { property: String, substring: String },
    /// `["all", p1, p2, ...]` — every child holds.
    All(Vec<Predicate>),
    /// `["any", p1, p2, ...]` — at least one child holds.
    Any(Vec<Predicate>),
}

/// Parenthesized debug rendering, e.g. `(is 'available'?)`. Diagnostics only;
/// this form is not parseable back into the rule language.
impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Is { property } => write!(f, "(is '{property}'?)"),
            Predicate::Not { property } => write!(f, "(not '{property}'?)"),
            Predicate::Equals { property, value } => match value {
                Value::String(s) => write!(f, "(= '{property}' '{s}'?)"),
                other => write!(f, "(= '{property}' '{other}'?)"),
            },
            Predicate::Contains { property, substring } => {
                write!(f, "(contains? '{property}' '{substring}'?)")
            }
            Predicate::All(children) => write_composite(f, "all", children),
            Predicate::Any(children) => write_composite(f, "any", children),
        }
    }
}

fn write_composite(
    f: &mut std::fmt::Formatter<'_>,
    operator: &str,
    children: &[Predicate],
) -> std::fmt::Result {
    write!(f, "({operator} [")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "]?)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_simple() {
        assert_eq!(
            Predicate::Is { property: "available".into() }.to_string(),
            "(is 'available'?)"
        );
        assert_eq!(Predicate::Not { property: "foo".into() }.to_string(), "(not 'foo'?)");
        assert_eq!(
            Predicate::Contains { property: "title".into(), substring: "metro".into() }.to_string(),
            "(contains? 'title' 'metro'?)"
        );
    }

    #[test]
    fn test_display_equals_values() {
        // string values render bare inside the quotes, everything else as JSON
        assert_eq!(
            Predicate::Equals { property: "year".into(), value: json!("1927") }.to_string(),
            "(= 'year' '1927'?)"
        );
        assert_eq!(
            Predicate::Equals { property: "year".into(), value: json!(1927) }.to_string(),
            "(= 'year' '1927'?)"
        );
        assert_eq!(
            Predicate::Equals { property: "flag".into(), value: json!(true) }.to_string(),
            "(= 'flag' 'true'?)"
        );
    }

    #[test]
    fn test_display_composite() {
        let pred = Predicate::All(vec![
            Predicate::Is { property: "available".into() },
            Predicate::Not { property: "movie".into() },
        ]);
        assert_eq!(pred.to_string(), "(all [(is 'available'?) (not 'movie'?)]?)");

        let pred = Predicate::Any(vec![pred]);
        assert_eq!(pred.to_string(), "(any [(all [(is 'available'?) (not 'movie'?)]?)]?)");
    }
}
