//! enumwire-compiler
//!
//! This crate implements:
//!  1) A tokenizer + parser for `.wire` declaration files,
//!  2) A descriptor extractor (marker opt-in, annotation checks, duplicate
//!     wire strings, duplicate enum identities),
//!  3) Code generation (`render_converter` → `String`, one artifact per
//!     extracted enum),
//!  4) Error types (`WireError`).

pub mod error;
pub mod types;
pub mod utils;
pub mod tokenizer;
pub mod parser;
pub mod extractor;
pub mod emitter;
pub mod compiler;

pub use compiler::compile_source;
pub use extractor::{extract_descriptors, Extraction};
pub use emitter::{artifact_file_name, render_converter};
