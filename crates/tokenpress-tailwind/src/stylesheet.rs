//! Reading declarations out of stylesheet text and wrapping rule blocks.

use regex::Regex;
use tracing::debug;

use crate::declaration::Declaration;
use crate::error::{Result, TailwindError};

const QUOTED: &str = r#"'(?:[^'\\]|\\.)*'|"(?:[^"\\]|\\.)*""#;
const COMMENT: &str = r"/\*[\s\S]*?(?:\*/|\z)";
const STATEMENT_BODY: &str = r#"[^;}'"]"#;
const DECLARATION_START: &str = r"(?:^|[\s{])--";

/// Every custom property in `css`, in source order.
///
/// Block comments are dropped first. The text is then split on `;` and `}`
/// outside quoted strings, and each statement is cut down to its first `--`
/// that opens a declaration (start of statement, or after whitespace or `{`).
///
/// # Errors
///
/// Returns [`TailwindError::MalformedDeclaration`] for a custom property
/// that does not hold exactly one `:`.
pub fn parse_declarations(css: &str) -> Result<Vec<Declaration>> {
    let comments = compile(&format!("{QUOTED}|{COMMENT}"))?;
    let statements = compile(&format!("(?:{QUOTED}|{STATEMENT_BODY})+"))?;
    let start = compile(DECLARATION_START)?;

    let text = comments.replace_all(css, |captures: &regex::Captures<'_>| {
        let matched = &captures[0];
        if matched.starts_with("/*") {
            String::new()
        } else {
            matched.to_string()
        }
    });

    let mut declarations = Vec::new();
    for statement in statements.find_iter(&text) {
        let statement = statement.as_str();
        let Some(found) = start.find(statement) else {
            continue;
        };
        let candidate = statement[found.end() - 2..].trim();
        declarations.push(Declaration::parse(candidate)?);
    }
    debug!(count = declarations.len(), "parsed custom properties");
    Ok(declarations)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| TailwindError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// `:root { … }` around `content`.
#[must_use]
pub fn wrap_in_root(content: &str) -> String {
    format!(":root {{\n{content}\n}}")
}

/// `[data-theme='<theme>'] { … }` holding `declarations`.
#[must_use]
pub fn data_theme_block(theme: &str, declarations: &[Declaration]) -> String {
    let body = declarations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("[data-theme='{theme}'] {{\n{body}\n}}")
}
