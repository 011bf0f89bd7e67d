//! enumwire
//!
//! Runtime support for converters produced by `enumwire-compiler`. Generated
//! code links against this crate for:
//!  1) `UnsupportedValueError`, returned when a raw enum value has no wire
//!     string,
//!  2) The `WireEnum` trait implemented by every generated enum.

use thiserror::Error;

/// Returned by a generated `to_wire` when the raw value matches no member
/// and is not the implicit zero state. Local to the single conversion call;
/// later conversions are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no wire string is defined for raw value {raw} of enum {enum_name}")]
pub struct UnsupportedValueError {
    enum_name: &'static str,
    raw: i32,
}

impl UnsupportedValueError {
    pub fn new(enum_name: &'static str, raw: i32) -> Self {
        UnsupportedValueError { enum_name, raw }
    }

    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    pub fn raw(&self) -> i32 {
        self.raw
    }
}

/// All generated enums convert to and from their canonical wire strings.
/// We require `Sized` so that `Self` can be constructed.
///
/// `from_wire` is total: unrecognized input resolves to the enum's sentinel
/// member when one exists, and to its zero value otherwise. Only `to_wire`
/// can fail.
pub trait WireEnum: Sized {
    fn to_wire(self) -> Result<&'static str, UnsupportedValueError>;
    fn from_wire(text: &str) -> Self;
}
