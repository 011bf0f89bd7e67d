use crate::{
    tokenizer::Token,
    types::{EnumDecl, MemberDecl, SchemaAst},
    utils::{error, quote},
    error::WireError,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER:      Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref EQUALS:          Regex = Regex::new(r"^=$").unwrap();
    static ref SEMICOLON:       Regex = Regex::new(r"^;$").unwrap();
    static ref STRING:          Regex = Regex::new(r#"^"[^"]*"$"#).unwrap();
    static ref LEFT_BRACE:      Regex = Regex::new(r"^\{$").unwrap();
    static ref RIGHT_BRACE:     Regex = Regex::new(r"^\}$").unwrap();
    static ref CONVERTER_TOKEN: Regex = Regex::new(r"^\[converter\]$").unwrap();
    static ref ENUM_KEYWORD:    Regex = Regex::new(r"^enum$").unwrap();
    static ref PACKAGE_KEYWORD: Regex = Regex::new(r"^package$").unwrap();
    static ref EOF:             Regex = Regex::new(r"^$").unwrap();
}

/// Parses a token stream into a `SchemaAst`.
pub fn parse_schema(tokens: &[Token]) -> Result<SchemaAst, WireError> {
    let mut enums        = Vec::new();
    let mut package_text = None;
    let mut index        = 0;

    fn current_token<'a>(tokens: &'a [Token], index: usize) -> &'a Token {
        tokens.get(index).expect("Unexpected end of tokens")
    }

    fn eat(tokens: &[Token], index: &mut usize, test: &Regex) -> bool {
        if test.is_match(&current_token(tokens, *index).text) {
            *index += 1;
            true
        } else {
            false
        }
    }

    fn expect(tokens: &[Token], index: &mut usize, test: &Regex, expected: &str) -> Result<(), WireError> {
        if !eat(tokens, index, test) {
            let tok = current_token(tokens, *index);
            return Err(error(
                &format!("Expected {} but found {}", expected, quote(&tok.text)),
                tok.line,
                tok.column,
            ));
        }
        Ok(())
    }

    fn unexpected_token(tokens: &[Token], index: &mut usize) -> WireError {
        let tok = current_token(tokens, *index);
        error(
            &format!("Unexpected token {}", quote(&tok.text)),
            tok.line,
            tok.column,
        )
    }

    // Handle package declaration
    if eat(tokens, &mut index, &PACKAGE_KEYWORD) {
        if index >= tokens.len() {
            return Err(error("Expected identifier after package", 0, 0));
        }
        let pkg_tok = current_token(tokens, index);
        expect(tokens, &mut index, &IDENTIFIER, "identifier")?;
        package_text = Some(pkg_tok.text.clone());
        expect(tokens, &mut index, &SEMICOLON, "\";\"")?;
    }

    // Parse enum declarations one by one
    while index < tokens.len() && !eat(tokens, &mut index, &EOF) {
        // Opt-in marker for converter generation
        let has_marker = eat(tokens, &mut index, &CONVERTER_TOKEN);

        if !eat(tokens, &mut index, &ENUM_KEYWORD) {
            return Err(unexpected_token(tokens, &mut index));
        }

        // Enum name
        let name_tok = current_token(tokens, index);
        expect(tokens, &mut index, &IDENTIFIER, "identifier")?;
        expect(tokens, &mut index, &LEFT_BRACE, "\"{\"")?;

        // Collect members
        let mut members = Vec::new();
        while !eat(tokens, &mut index, &RIGHT_BRACE) {
            let m_tok = current_token(tokens, index);
            expect(tokens, &mut index, &IDENTIFIER, "identifier")?;
            let m_line   = m_tok.line;
            let m_column = m_tok.column;
            let m_name   = m_tok.text.clone();

            // Wire string (optional in the grammar; the extractor rejects
            // marked enums with members that omit it)
            let wire = if eat(tokens, &mut index, &EQUALS) {
                let w_tok = current_token(tokens, index);
                expect(tokens, &mut index, &STRING, "string")?;
                Some(w_tok.text.trim_matches('"').to_string())
            } else {
                None
            };

            expect(tokens, &mut index, &SEMICOLON, "\";\"")?;

            members.push(MemberDecl {
                name:   m_name,
                line:   m_line,
                column: m_column,
                wire,
            });
        }

        enums.push(EnumDecl {
            name:   name_tok.text.clone(),
            line:   name_tok.line,
            column: name_tok.column,
            has_marker,
            members,
        });
    }

    Ok(SchemaAst {
        package: package_text,
        enums,
    })
}
