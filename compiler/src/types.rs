use serde::Serialize;

/// Parsed form of one `.wire` file, prior to extraction.
#[derive(Debug, PartialEq, Serialize)]
pub struct SchemaAst {
    pub package: Option<String>,
    pub enums:   Vec<EnumDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDecl {
    pub name:       String,
    pub line:       usize,
    pub column:     usize,
    pub has_marker: bool,
    pub members:    Vec<MemberDecl>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDecl {
    pub name:   String,
    pub line:   usize,
    pub column: usize,
    pub wire:   Option<String>,
}

/// Extracted metadata for one marked enum. Immutable after extraction and
/// consumed exactly once by the emitter; the artifact is a pure function of
/// this record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDescriptor {
    pub namespace:          Option<String>,
    pub name:               String,
    pub members:            Vec<EnumMember>,
    /// True iff some member's wire string equals "unknown" ignoring ASCII
    /// case. Computed once at extraction; the emitter never re-derives it.
    pub has_unknown_member: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumMember {
    pub key:   String,
    pub value: String,
}
