#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! Core types shared by the diffmatch engine and its assertion macros.
//!
//! # Glyphs
//!
//! ```text
//! -  missing     (expected, not found)
//! +  additional  (found, not expected)
//! ~  matched a text pattern
//! :  matched a runtime type
//! {  satisfied a predicate
//! .  fell inside an interval
//! |  matched a composite alternative
//! ```

mod backend;
mod category;
mod error;
mod expectation;
mod macros;
mod options;
mod scheme;
mod tag;
mod tree;
mod value;

pub use backend::{AnsiBackend, ColorBackend, HtmlBackend, PlainBackend};
pub use category::{Category, Counts, MatchKind};
pub use error::DiffError;
pub use expectation::{
    Alternative, Composite, Expectation, Interval, Predicate, Repeat, SizeBound, TextPattern,
};
pub use options::{AlternativeOptions, Options, SchemeChoice};
pub use scheme::{Style, StyleTable};
pub use tag::{Tag, TypeRegistry};
pub use tree::{Child, DiffKind, DiffTree, Shape, TextChunk};
pub use value::{Key, SharedValue, Value};

pub use owo_colors::AnsiColors;
