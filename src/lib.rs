//! A small regular-expression engine with a grep-style front end.
//!
//! Patterns are compiled once into a tree of match nodes and executed by a
//! backtracking matcher with capture support; `scan` holds the line-oriented
//! file plumbing the `regrep` binary is built on.

pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod regex;
pub mod scan;

pub use error::PatternError;
pub use regex::Regex;
