use crate::{
    extractor::{extract_descriptors, Extraction},
    tokenizer::tokenize_schema,
    parser::parse_schema,
    error::WireError,
};

/// Compile a textual declaration file into an `Extraction`.
/// Tokenizer and parser failures abort the whole run; extraction failures
/// are carried as per-enum diagnostics instead, so the remaining enums can
/// still be rendered.
pub fn compile_source(text: &str) -> Result<Extraction, WireError> {
    let tokens = tokenize_schema(text)?;
    let ast = parse_schema(&tokens)?;
    Ok(extract_descriptors(&ast))
}
