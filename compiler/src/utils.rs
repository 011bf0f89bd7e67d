use crate::error::WireError;

pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap()
}

pub fn error(msg: &str, line: usize, column: usize) -> WireError {
    WireError::ParseError {
        msg: msg.to_string(),
        line,
        column,
    }
}
