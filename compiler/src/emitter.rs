use crate::types::{EnumDescriptor, EnumMember};
use crate::utils::quote;

/// Converts a string to PascalCase.
/// - If the string contains underscores, it splits on underscores and converts each word
///   so that its first letter is uppercase and the rest lowercase.
/// - If the string does not contain underscores and is fully uppercase, it converts it
///   so that only the first letter is uppercase and the rest are lowercase.
/// - Otherwise, it ensures only the first letter is uppercase.
fn to_pascal_case(s: &str) -> String {
    if s.contains('_') {
        s.split('_')
         .filter(|word| !word.is_empty())
         .map(|word| {
             let mut chars = word.chars();
             match chars.next() {
                 None => String::new(),
                 Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
             }
         })
         .collect::<String>()
    } else {
        if s == s.to_uppercase() {
            // Fully uppercase input (e.g. "ACTIVE") keeps only its first letter uppercase.
            let mut chars = s.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + &chars.as_str().to_lowercase(),
            }
        } else {
            let mut chars = s.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().to_string() + chars.as_str(),
            }
        }
    }
}

/// Converts a string to snake_case without splitting acronyms
/// (e.g. "chatID" becomes "chat_id").
fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut snake = String::new();
    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                if !prev.is_uppercase() || (i + 1 < chars.len() && chars[i + 1].is_lowercase()) {
                    snake.push('_');
                }
            }
            snake.push(c.to_lowercase().next().unwrap());
        } else {
            snake.push(c);
        }
    }
    snake
}

/// Escapes Rust reserved keywords by suffixing with an underscore.
fn escape_rust_keyword(s: &str) -> String {
    let keywords = [
        "as", "break", "const", "continue", "crate", "else",
        "enum", "extern", "false", "fn", "for", "if", "impl",
        "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static",
        "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while",
    ];
    if keywords.contains(&s) {
        format!("{}_", s)
    } else {
        s.to_string()
    }
}

/// Rust variant identifier for a member key.
fn variant_name(member: &EnumMember) -> String {
    escape_rust_keyword(&to_pascal_case(&member.key))
}

/// Name of the variant holding the zero value when no member's wire string
/// is "unknown".
const ZERO_VARIANT: &str = "Unspecified";

/// File name for one generated artifact.
pub fn artifact_file_name(descriptor: &EnumDescriptor) -> String {
    format!("{}.rs", to_snake_case(&descriptor.name))
}

/// Index of the sentinel member, i.e. the first member whose wire string is
/// "unknown" ignoring ASCII case. Gated on the flag the extractor computed
/// so that the emitter never contradicts it.
fn sentinel_index(descriptor: &EnumDescriptor) -> Option<usize> {
    if !descriptor.has_unknown_member {
        return None;
    }
    descriptor
        .members
        .iter()
        .position(|m| m.value.eq_ignore_ascii_case("unknown"))
}

/// Discriminant of each member, in declaration order. The sentinel member
/// gets 0; every other member is numbered from 1 in declaration order, so
/// that an enum without a sentinel leaves its zero value unassigned.
fn discriminants(descriptor: &EnumDescriptor, sentinel: Option<usize>) -> Vec<i32> {
    let mut next = 1;
    let mut values = Vec::with_capacity(descriptor.members.len());
    for index in 0..descriptor.members.len() {
        if Some(index) == sentinel {
            values.push(0);
        } else {
            values.push(next);
            next += 1;
        }
    }
    values
}

/// Renders the converter artifact for one descriptor: banner, optional
/// namespace wrapper, the enum definition, the `<Name>Converter` type, the
/// `WireEnum` impl, and serde impls delegating to the converter. Pure:
/// identical descriptors produce byte-identical text.
pub fn render_converter(descriptor: &EnumDescriptor) -> String {
    let enum_name = to_pascal_case(&descriptor.name);
    let sentinel = sentinel_index(descriptor);
    let values = discriminants(descriptor, sentinel);
    let mut code: Vec<String> = Vec::new();

    code.push(
        "//------------------------------------------------------------------------------\n\
         // <auto-generated>\n\
         //     This code was generated by the enumwire compiler.\n\
         //\n\
         //     Changes to this file may cause incorrect behavior and will be lost if\n\
         //     the code is regenerated.\n\
         // </auto-generated>\n\
         //------------------------------------------------------------------------------\n\
         \n\
         #![allow(dead_code)]\n"
            .to_string(),
    );

    // Start module
    if let Some(namespace) = &descriptor.namespace {
        code.push(format!("pub mod {} {{", to_snake_case(namespace)));
    }

    // Add necessary imports
    code.push("use serde::ser::Error as _;".to_string());
    code.push("use serde::{Deserialize, Deserializer, Serialize, Serializer};".to_string());
    code.push("use enumwire::{UnsupportedValueError, WireEnum};".to_string());
    code.push("".to_string());

    code.push(generate_enum(descriptor, &enum_name, sentinel, &values));
    code.push(generate_converter(descriptor, &enum_name, sentinel));
    code.push(generate_wire_enum_impl(&enum_name));
    code.push(generate_serde_impls(&enum_name));

    if descriptor.namespace.is_some() {
        code.push("}".to_string());
    }

    code.join("\n")
}

/// Generates the enum definition. Variants follow declaration order with
/// explicit discriminants; without a sentinel, an extra zero variant stands
/// in for the type's uninitialized state.
fn generate_enum(
    descriptor: &EnumDescriptor,
    enum_name: &str,
    sentinel: Option<usize>,
    values: &[i32],
) -> String {
    let mut variants = Vec::new();

    if !descriptor.has_unknown_member {
        variants.push("    /// Zero value; no declared member maps to it.".to_string());
        variants.push("    #[default]".to_string());
        variants.push(format!("    {} = 0,", ZERO_VARIANT));
    }

    for (index, member) in descriptor.members.iter().enumerate() {
        if Some(index) == sentinel {
            variants.push("    #[default]".to_string());
        }
        variants.push(format!("    {} = {},", variant_name(member), values[index]));
    }

    format!(
        "#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]\n\
         #[repr(i32)]\n\
         pub enum {} {{\n{}\n}}\n",
        enum_name,
        variants.join("\n")
    )
}

/// Generates the `<Name>Converter` type with its `to_wire`/`from_wire` pair.
fn generate_converter(
    descriptor: &EnumDescriptor,
    enum_name: &str,
    sentinel: Option<usize>,
) -> String {
    let mut ser_arms = Vec::new();
    for member in &descriptor.members {
        ser_arms.push(format!(
            "            v if v == {}::{} as i32 => Ok({}),",
            enum_name,
            variant_name(member),
            quote(&member.value)
        ));
    }
    if !descriptor.has_unknown_member {
        // The zero value has no named member but still serializes.
        ser_arms.push("            0 => Ok(\"unknown\"),".to_string());
    }
    ser_arms.push(format!(
        "            raw => Err(UnsupportedValueError::new(\"{}\", raw)),",
        enum_name
    ));

    let mut de_arms = Vec::new();
    for member in &descriptor.members {
        de_arms.push(format!(
            "            {} => {}::{},",
            quote(&member.value),
            enum_name,
            variant_name(member)
        ));
    }
    let fallback = match sentinel {
        Some(index) => variant_name(&descriptor.members[index]),
        None => ZERO_VARIANT.to_string(),
    };
    de_arms.push(format!("            _ => {}::{},", enum_name, fallback));

    format!(
        "pub struct {name}Converter;\n\
         \n\
         impl {name}Converter {{\n\
         \x20   /// Maps a value to its canonical wire string. Fails only for a raw\n\
         \x20   /// value outside the declared members and the zero state.\n\
         \x20   pub fn to_wire(value: {name}) -> Result<&'static str, UnsupportedValueError> {{\n\
         \x20       match value as i32 {{\n{ser}\n\
         \x20       }}\n\
         \x20   }}\n\
         \n\
         \x20   /// Maps a wire string back to a value. Total: unrecognized input\n\
         \x20   /// resolves to the fallback member instead of failing.\n\
         \x20   pub fn from_wire(text: &str) -> {name} {{\n\
         \x20       match text {{\n{de}\n\
         \x20       }}\n\
         \x20   }}\n\
         }}\n",
        name = enum_name,
        ser = ser_arms.join("\n"),
        de = de_arms.join("\n"),
    )
}

fn generate_wire_enum_impl(enum_name: &str) -> String {
    format!(
        "impl WireEnum for {name} {{\n\
         \x20   fn to_wire(self) -> Result<&'static str, UnsupportedValueError> {{\n\
         \x20       {name}Converter::to_wire(self)\n\
         \x20   }}\n\
         \n\
         \x20   fn from_wire(text: &str) -> Self {{\n\
         \x20       {name}Converter::from_wire(text)\n\
         \x20   }}\n\
         }}\n",
        name = enum_name,
    )
}

fn generate_serde_impls(enum_name: &str) -> String {
    format!(
        "impl Serialize for {name} {{\n\
         \x20   fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {{\n\
         \x20       match {name}Converter::to_wire(*self) {{\n\
         \x20           Ok(text) => serializer.serialize_str(text),\n\
         \x20           Err(err) => Err(S::Error::custom(err)),\n\
         \x20       }}\n\
         \x20   }}\n\
         }}\n\
         \n\
         impl<'de> Deserialize<'de> for {name} {{\n\
         \x20   fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {{\n\
         \x20       let text = String::deserialize(deserializer)?;\n\
         \x20       Ok({name}Converter::from_wire(&text))\n\
         \x20   }}\n\
         }}\n",
        name = enum_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("chat_member"), "ChatMember");
        assert_eq!(to_pascal_case("ACTIVE"), "Active");
        assert_eq!(to_pascal_case("messageKind"), "MessageKind");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("ChatMemberStatus"), "chat_member_status");
        assert_eq!(to_snake_case("chatID"), "chat_id");
    }

    #[test]
    fn test_escape_rust_keyword() {
        assert_eq!(escape_rust_keyword("type"), "type_");
        assert_eq!(escape_rust_keyword("Active"), "Active");
    }
}
