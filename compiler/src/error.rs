use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("Enum {enum_name}: member {member} at line {line}, column {column} has no wire string")]
    MissingAnnotation {
        enum_name: String,
        member:    String,
        line:      usize,
        column:    usize,
    },

    #[error("Enum {enum_name}: member {member} at line {line}, column {column} reuses the wire string {value}")]
    DuplicateWireString {
        enum_name: String,
        member:    String,
        value:     String,
        line:      usize,
        column:    usize,
    },

    #[error("Enum {enum_name}: member {member} at line {line}, column {column} is declared twice")]
    DuplicateMember {
        enum_name: String,
        member:    String,
        line:      usize,
        column:    usize,
    },

    #[error("Enum {name} at line {line}, column {column} is declared twice")]
    DuplicateEnum {
        name:   String,
        line:   usize,
        column: usize,
    },

    #[error("{0} enum(s) failed extraction")]
    ExtractionFailed(usize),
}
