//! Evaluate compiled predicates against property-bearing objects, and filter
//! streams of such objects with a single compiled rule.

use crate::ast::Predicate;
use serde_json::Value;

/// A named property lookup over some domain object. Predicates only ever call
/// `get_property`; `set_property` is part of the collaborator contract so that
/// providers can be populated by the caller.
pub trait PropertyProvider {
    /// The value of the named property, or `None` if the object doesn't have it.
    fn get_property(&self, name: &str) -> Option<Value>;
    fn set_property(&mut self, name: &str, value: Value);
}

/// Plain JSON objects are property providers as-is.
impl PropertyProvider for serde_json::Map<String, Value> {
    fn get_property(&self, name: &str) -> Option<Value> { self.get(name).cloned() }

    fn set_property(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}

// An absent property and an explicit null are the same thing at evaluation
// time: `not` accepts both, `=` against a null right-hand side matches both.
fn lookup<P: PropertyProvider + ?Sized>(source: &P, property: &str) -> Value {
    source.get_property(property).unwrap_or(Value::Null)
}

impl Predicate {
    /// Test this predicate against one object. Total: never fails or panics,
    /// whatever shape the object's properties have.
    ///
    /// `is` only accepts boolean true — a truthy value like the string
    /// `"true"` does not satisfy it. `not` accepts boolean false and
    /// null/absent, so `is` and `not` are not complements for values that are
    /// neither boolean. `all`/`any` short-circuit left to right.
    pub fn test<P: PropertyProvider + ?Sized>(&self, source: &P) -> bool {
        match self {
            Predicate::Is { property } => lookup(source, property) == Value::Bool(true),
            Predicate::Not { property } => {
                matches!(lookup(source, property), Value::Bool(false) | Value::Null)
            }
            Predicate::Equals { property, value } => lookup(source, property) == *value,
            Predicate::Contains { property, substring } => match lookup(source, property) {
                Value::String(s) => s.to_lowercase().contains(substring.as_str()),
                // a value with no string form never contains anything
                _ => false,
            },
            Predicate::All(children) => children.iter().all(|child| child.test(source)),
            Predicate::Any(children) => children.iter().any(|child| child.test(source)),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum FilterResult<R> {
    Pass(R),
    Skip(R),
}

/// Applies one compiled predicate to every record of an underlying iterator,
/// tagging each as passed or skipped. Evaluation is total, so there is no
/// error arm.
pub struct FilterIterator<I> {
    iter: I,
    predicate: Predicate,
}

impl<I, R> FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: PropertyProvider,
{
    pub fn new(iter: I, predicate: Predicate) -> Self {
        Self { iter, predicate }
    }
}

impl<I, R> Iterator for FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: PropertyProvider,
{
    type Item = FilterResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|record| {
            if self.predicate.test(&record) {
                FilterResult::Pass(record)
            } else {
                FilterResult::Skip(record)
            }
        })
    }
}
