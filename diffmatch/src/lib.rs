#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod tracing_macros;

mod diff;
mod difference;
mod matcher;
mod report;
pub mod sequences;
mod verdict;

pub use diff::Expected;
pub use difference::{Difference, MatchDiff, difference};
pub use report::render_tree;
pub use verdict::Verdict;

pub use diffmatch_core::*;
