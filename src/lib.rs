//! Data-driven boolean rules over property-bearing objects.
//!
//! A rule arrives as a JSON array — `["all", ["is", "available"], ["not",
//! "movie"]]` — and compiles once into an immutable [`Predicate`] tree. The
//! tree is then tested against any number of objects that expose named
//! properties through [`PropertyProvider`]. All validation happens at compile
//! time, so testing never fails: a malformed rule is rejected up front, and a
//! compiled tree answers true or false for every object.
//!
//! ```
//! use propsieve::{compile_predicate, PropertyProvider};
//! use serde_json::{json, Map};
//!
//! let rule = json!(["all", ["is", "available"], ["contains", "title", "metro"]]);
//! let predicate = compile_predicate(&rule).unwrap();
//!
//! let mut movie = Map::new();
//! movie.set_property("available", json!(true));
//! movie.set_property("title", json!("Metropolis"));
//! assert!(predicate.test(&movie));
//! ```
//!
//! The compiler reads its input through the [`ValueReader`] trait rather than
//! a concrete decoder; `serde_json::Value` implements it out of the box.

pub mod ast;
pub mod compiler;
pub mod conversion;
pub mod error;
pub mod filter;
pub mod reader;

pub use ast::Predicate;
pub use compiler::compile_predicate;
pub use error::CompileError;
pub use filter::{FilterIterator, FilterResult, PropertyProvider};
pub use reader::ValueReader;
