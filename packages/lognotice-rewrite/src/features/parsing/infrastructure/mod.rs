//! Parsing infrastructure - external dependencies

mod java_parser;

pub use java_parser::JavaParser;
