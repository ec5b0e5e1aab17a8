//! Recursive-descent compiler from the JSON-array rule language into a
//! [`Predicate`] tree. Every structural check happens here, so a compiled
//! tree is total: `test` always answers, for any object.

use crate::ast::Predicate;
use crate::error::CompileError;
use crate::reader::ValueReader;
use tracing::trace;

/// Compile one rule expression into a predicate tree.
///
/// The expression must be a sequence whose first element is one of the
/// operators `is`, `not`, `=`, `contains`, `all`, `any`, followed by operands
/// per the operator's arity. Composite operators (`all`/`any`) compile their
/// operands recursively, in order; the first failing operand aborts the whole
/// compile with its position wrapped into the error.
pub fn compile_predicate<V: ValueReader + ?Sized>(value: &V) -> Result<Predicate, CompileError> {
    let len = value.seq_len().unwrap_or(0);
    if len <= 1 {
        return Err(CompileError::InvalidShape(len));
    }
    let operator = value
        .at_index(0)
        .and_then(ValueReader::read_string)
        .ok_or(CompileError::InvalidOperator)?;

    trace!(operator, len, "compiling rule");

    match operator {
        "all" => Ok(Predicate::All(compile_children("all", len, value)?)),
        "any" => Ok(Predicate::Any(compile_children("any", len, value)?)),
        "is" | "not" | "=" | "contains" => compile_simple(operator, len, value),
        other => Err(CompileError::UnknownOperator(other.to_string())),
    }
}

/// Compile the operands of an `all`/`any` rule, elements 1..len in order.
fn compile_children<V: ValueReader + ?Sized>(
    operator: &'static str,
    len: usize,
    value: &V,
) -> Result<Vec<Predicate>, CompileError> {
    let mut children = Vec::with_capacity(len - 1);
    for index in 1..len {
        let child = value.at_index(index).ok_or(CompileError::InvalidShape(len))?;
        match compile_predicate(child) {
            Ok(predicate) => children.push(predicate),
            Err(source) => {
                return Err(CompileError::InvalidChild { operator, index, source: Box::new(source) });
            }
        }
    }
    Ok(children)
}

fn compile_simple<V: ValueReader + ?Sized>(
    operator: &str,
    len: usize,
    value: &V,
) -> Result<Predicate, CompileError> {
    let invalid = || CompileError::InvalidRule(operator.to_string());
    match operator {
        "is" | "not" => {
            if len != 2 {
                return Err(invalid());
            }
            let property = read_property(value, 1).ok_or_else(invalid)?;
            if operator == "is" {
                Ok(Predicate::Is { property })
            } else {
                Ok(Predicate::Not { property })
            }
        }
        "=" => {
            if len != 3 {
                return Err(invalid());
            }
            let property = read_property(value, 1).ok_or_else(invalid)?;
            let value = value
                .at_index(2)
                .and_then(ValueReader::read_data)
                .ok_or_else(invalid)?;
            Ok(Predicate::Equals { property, value })
        }
        "contains" => {
            if len != 3 {
                return Err(invalid());
            }
            let property = read_property(value, 1).ok_or_else(invalid)?;
            let substring = value
                .at_index(2)
                .and_then(ValueReader::read_string)
                .ok_or_else(invalid)?;
            Ok(Predicate::Contains { property, substring: substring.to_lowercase() })
        }
        _ => unreachable!("compile_simple only receives recognized operators"),
    }
}

fn read_property<V: ValueReader + ?Sized>(value: &V, index: usize) -> Option<String> {
    value
        .at_index(index)
        .and_then(ValueReader::read_string)
        .map(str::to_string)
}
