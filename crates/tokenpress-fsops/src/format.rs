//! Artifact formatting.
//!
//! # Design
//! - `TidyFormatter` reflows stylesheets to one statement per line with
//!   four-space indentation per block depth; strings and comments are copied
//!   verbatim.
//! - JSON is re-encoded with `serde_json`'s pretty printer.
//! - Structural problems (unbalanced braces, unterminated strings or comments)
//!   are reported instead of producing mangled output.

use crate::artifact::Syntax;
use crate::error::FormatError;

/// Pretty-printer for artifact text.
pub trait Formatter {
    /// Format `text` according to `syntax`.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the text is structurally invalid.
    fn format(&self, text: &str, syntax: Syntax) -> Result<String, FormatError>;
}

/// Formatter for CSS, SCSS and JSON artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TidyFormatter;

const INDENT: &str = "    ";

impl Formatter for TidyFormatter {
    fn format(&self, text: &str, syntax: Syntax) -> Result<String, FormatError> {
        match syntax {
            Syntax::Json => format_json(text),
            Syntax::Css | Syntax::Scss => format_stylesheet(text, syntax),
        }
    }
}

fn format_json(text: &str) -> Result<String, FormatError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| FormatError::Json { source })?;
    let mut rendered =
        serde_json::to_string_pretty(&value).map_err(|source| FormatError::Json { source })?;
    rendered.push('\n');
    Ok(rendered)
}

#[derive(Debug, Clone, Copy)]
enum State {
    Normal,
    Quoted { quote: char, start: usize },
    Escaped { quote: char, start: usize },
    BlockComment { start: usize },
    LineComment,
}

struct Reflow {
    out: String,
    line: String,
    depth: usize,
}

impl Reflow {
    fn emit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn flush_line(&mut self) {
        let line = std::mem::take(&mut self.line);
        self.emit(&line);
    }

    fn at_statement_start(&self) -> bool {
        self.line.trim().is_empty()
    }
}

fn format_stylesheet(text: &str, syntax: Syntax) -> Result<String, FormatError> {
    let mut reflow = Reflow {
        out: String::with_capacity(text.len()),
        line: String::new(),
        depth: 0,
    };
    let mut state = State::Normal;
    let mut comment_is_statement = false;
    let mut chars = text.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        state = match state {
            State::Quoted { quote, start } => {
                reflow.line.push(ch);
                match ch {
                    '\\' => State::Escaped { quote, start },
                    c if c == quote => State::Normal,
                    _ => State::Quoted { quote, start },
                }
            }
            State::Escaped { quote, start } => {
                reflow.line.push(ch);
                State::Quoted { quote, start }
            }
            State::BlockComment { start } => {
                reflow.line.push(ch);
                if ch == '*' && chars.peek().is_some_and(|(_, next)| *next == '/') {
                    chars.next();
                    reflow.line.push('/');
                    if comment_is_statement {
                        reflow.flush_line();
                    }
                    State::Normal
                } else {
                    State::BlockComment { start }
                }
            }
            State::LineComment => {
                if ch == '\n' {
                    reflow.flush_line();
                    State::Normal
                } else {
                    reflow.line.push(ch);
                    State::LineComment
                }
            }
            State::Normal => match ch {
                '"' | '\'' => {
                    reflow.line.push(ch);
                    State::Quoted {
                        quote: ch,
                        start: offset,
                    }
                }
                '/' if chars.peek().is_some_and(|(_, next)| *next == '*') => {
                    chars.next();
                    comment_is_statement = reflow.at_statement_start();
                    reflow.line.push_str("/*");
                    State::BlockComment { start: offset }
                }
                '/' if syntax == Syntax::Scss
                    && reflow.at_statement_start()
                    && chars.peek().is_some_and(|(_, next)| *next == '/') =>
                {
                    chars.next();
                    reflow.line.clear();
                    reflow.line.push_str("//");
                    State::LineComment
                }
                '{' => {
                    let selector = std::mem::take(&mut reflow.line);
                    let selector = selector.trim();
                    if selector.is_empty() {
                        reflow.emit("{");
                    } else {
                        reflow.emit(&format!("{selector} {{"));
                    }
                    reflow.depth += 1;
                    State::Normal
                }
                '}' => {
                    reflow.flush_line();
                    if reflow.depth == 0 {
                        return Err(FormatError::Unbalanced { offset });
                    }
                    reflow.depth -= 1;
                    reflow.emit("}");
                    State::Normal
                }
                ';' => {
                    reflow.line.push(';');
                    reflow.flush_line();
                    State::Normal
                }
                c if c.is_whitespace() => {
                    if !reflow.line.is_empty() && !reflow.line.ends_with(' ') {
                        reflow.line.push(' ');
                    }
                    State::Normal
                }
                c => {
                    reflow.line.push(c);
                    State::Normal
                }
            },
        };
    }

    match state {
        State::Quoted { start, .. } | State::Escaped { start, .. } => {
            return Err(FormatError::UnterminatedString { offset: start });
        }
        State::BlockComment { start } => {
            return Err(FormatError::UnterminatedComment { offset: start });
        }
        State::Normal | State::LineComment => {}
    }
    if reflow.depth != 0 {
        return Err(FormatError::Unbalanced { offset: text.len() });
    }
    reflow.flush_line();
    Ok(reflow.out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn reflows_root_block() -> Result<(), Box<dyn Error>> {
        let formatted = TidyFormatter.format(
            ":root {--brand-primary: rgb(0 0 255);   --brand-radius:   4px;}",
            Syntax::Css,
        )?;
        assert_eq!(
            formatted,
            ":root {\n    --brand-primary: rgb(0 0 255);\n    --brand-radius: 4px;\n}\n"
        );
        Ok(())
    }

    #[test]
    fn keeps_strings_and_comments_verbatim() -> Result<(), Box<dyn Error>> {
        let formatted = TidyFormatter.format(
            "@theme inline {\n/*## Colors ##*/\n--font-body: 'Open  Sans; x';\n}",
            Syntax::Css,
        )?;
        assert_eq!(
            formatted,
            "@theme inline {\n    /*## Colors ##*/\n    --font-body: 'Open  Sans; x';\n}\n"
        );
        Ok(())
    }

    #[test]
    fn nests_blocks() -> Result<(), Box<dyn Error>> {
        let formatted = TidyFormatter.format(
            ":root { [data-theme='light'] { --a: 1; } }",
            Syntax::Css,
        )?;
        assert_eq!(
            formatted,
            ":root {\n    [data-theme='light'] {\n        --a: 1;\n    }\n}\n"
        );
        Ok(())
    }

    #[test]
    fn scss_statements_and_line_comments() -> Result<(), Box<dyn Error>> {
        let formatted = TidyFormatter.format(
            "// generated\n$primary: rgba(0, 0, 255, 1) !default;$gap: 4;",
            Syntax::Scss,
        )?;
        assert_eq!(
            formatted,
            "// generated\n$primary: rgba(0, 0, 255, 1) !default;\n$gap: 4;\n"
        );
        Ok(())
    }

    #[test]
    fn rejects_structural_errors() {
        assert!(matches!(
            TidyFormatter.format("a { b: c;", Syntax::Css),
            Err(FormatError::Unbalanced { .. })
        ));
        assert!(matches!(
            TidyFormatter.format("} a", Syntax::Css),
            Err(FormatError::Unbalanced { offset: 0 })
        ));
        assert!(matches!(
            TidyFormatter.format("a { b: 'c; }", Syntax::Css),
            Err(FormatError::UnterminatedString { offset: 7 })
        ));
        assert!(matches!(
            TidyFormatter.format("/* open", Syntax::Css),
            Err(FormatError::UnterminatedComment { offset: 0 })
        ));
    }

    #[test]
    fn pretty_prints_json() -> Result<(), Box<dyn Error>> {
        let formatted = TidyFormatter.format(r#"{"a":[1,2]}"#, Syntax::Json)?;
        assert_eq!(formatted, "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n");
        assert!(matches!(
            TidyFormatter.format("{", Syntax::Json),
            Err(FormatError::Json { .. })
        ));
        Ok(())
    }
}
