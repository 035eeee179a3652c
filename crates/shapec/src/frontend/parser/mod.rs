//! Parser module for the shape language

mod parser;

pub use parser::Parser;
