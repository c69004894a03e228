//! Markup form of decorated text
//!
//!     Tests, configuration templates and the command line need a way to write decorated
//!     text as a plain string. The markup is deliberately small:
//!
//!         𝐴^{2}𝑎𝑏      superscript run: `^{…}`
//!         𝑥_{1}        subscript run:   `_{…}`
//!
//!     Everything else is a normal glyph, including a `^` or `_` that is not followed
//!     by a braced run. Runs do not nest. [`detokenize`](super::formatting::detokenize)
//!     renders elements back into this form.

use super::core::Decoration;
use super::document::DecoratedText;
use logos::Logos;

/// Tokens of the markup form
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum MarkupToken {
    #[regex(r"\^\{[^}]*\}", |lex| run_body(lex.slice()))]
    Superscript(String),

    #[regex(r"_\{[^}]*\}", |lex| run_body(lex.slice()))]
    Subscript(String),

    // Text content (catch-all for non-special characters)
    #[regex(r"[^\^_]+", |lex| lex.slice().to_string())]
    Text(String),

    #[token("^")]
    Caret,

    #[token("_")]
    Underscore,
}

/// Strips the two-byte opener and the closing brace of a run
fn run_body(slice: &str) -> String {
    slice[2..slice.len() - 1].to_string()
}

/// Parses the markup form into a decorated document
pub fn parse_markup(source: &str) -> DecoratedText {
    let mut doc = DecoratedText::default();
    let mut lexer = MarkupToken::lexer(source);
    while let Some(token) = lexer.next() {
        match token {
            Ok(MarkupToken::Superscript(body)) => doc.push(&body, Decoration::Superscript),
            Ok(MarkupToken::Subscript(body)) => doc.push(&body, Decoration::Subscript),
            Ok(MarkupToken::Text(text)) => doc.push(&text, Decoration::Normal),
            Ok(MarkupToken::Caret) => doc.push("^", Decoration::Normal),
            Ok(MarkupToken::Underscore) => doc.push("_", Decoration::Normal),
            Err(()) => doc.push(lexer.slice(), Decoration::Normal),
        }
    }
    doc
}
