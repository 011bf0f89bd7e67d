use std::collections::HashSet;
use crate::{
    types::{EnumDescriptor, EnumMember, SchemaAst},
    error::WireError,
};

/// Result of extracting descriptors from one parsed file. A diagnostic is
/// fatal for its own enum only; the remaining enums still extract, so one
/// bad declaration never blocks generation for the others.
#[derive(Debug)]
pub struct Extraction {
    pub descriptors: Vec<EnumDescriptor>,
    pub diagnostics: Vec<WireError>,
}

impl Extraction {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Walks every enum declaration and produces zero or one `EnumDescriptor`
/// per enum: unmarked enums are skipped, and marked enums are validated
/// member by member. Pure read of the AST; the only output besides the
/// descriptors is the diagnostics list.
pub fn extract_descriptors(schema: &SchemaAst) -> Extraction {
    let mut descriptors: Vec<EnumDescriptor> = Vec::new();
    let mut diagnostics: Vec<WireError> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for decl in &schema.enums {
        if !decl.has_marker {
            continue;
        }

        // Identity (namespace, name) must be unique across the set;
        // the first declaration wins.
        if !seen_names.insert(decl.name.clone()) {
            diagnostics.push(WireError::DuplicateEnum {
                name:   decl.name.clone(),
                line:   decl.line,
                column: decl.column,
            });
            continue;
        }

        let mut members: Vec<EnumMember> = Vec::new();
        let mut seen_keys: HashSet<&str> = HashSet::new();
        let mut seen_wires: HashSet<&str> = HashSet::new();
        let mut failed = false;

        for member in &decl.members {
            let wire = match &member.wire {
                Some(wire) => wire,
                None => {
                    // A silent skip here would leave the generated
                    // converter unable to serialize this member, so the
                    // whole enum is rejected instead.
                    diagnostics.push(WireError::MissingAnnotation {
                        enum_name: decl.name.clone(),
                        member:    member.name.clone(),
                        line:      member.line,
                        column:    member.column,
                    });
                    failed = true;
                    continue;
                }
            };

            if !seen_keys.insert(member.name.as_str()) {
                diagnostics.push(WireError::DuplicateMember {
                    enum_name: decl.name.clone(),
                    member:    member.name.clone(),
                    line:      member.line,
                    column:    member.column,
                });
                failed = true;
                continue;
            }

            // Two members sharing one wire string would make round-trip
            // deserialization ambiguous.
            if !seen_wires.insert(wire.as_str()) {
                diagnostics.push(WireError::DuplicateWireString {
                    enum_name: decl.name.clone(),
                    member:    member.name.clone(),
                    value:     wire.clone(),
                    line:      member.line,
                    column:    member.column,
                });
                failed = true;
                continue;
            }

            members.push(EnumMember {
                key:   member.name.clone(),
                value: wire.clone(),
            });
        }

        if failed {
            continue;
        }

        let has_unknown_member = members
            .iter()
            .any(|m| m.value.eq_ignore_ascii_case("unknown"));

        descriptors.push(EnumDescriptor {
            namespace: schema.package.clone(),
            name: decl.name.clone(),
            members,
            has_unknown_member,
        });
    }

    Extraction {
        descriptors,
        diagnostics,
    }
}
