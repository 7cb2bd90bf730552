use logos::Logos;

/// Represents one raw lexical unit of an input line.
///
/// The lexer only classifies characters. Numbers are delivered one digit at a
/// time because whitespace between digits does not end a number; the
/// tokenizer accumulates them and resolves signs, operator runs and implied
/// multiplication.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A single decimal digit, `0` through `9`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(u8),
    /// An ASCII letter, a candidate variable reference.
    #[regex(r"[a-zA-Z]", parse_letter)]
    Letter(char),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses the digit under the lexer cursor.
///
/// # Returns
/// - `Some(u8)`: The digit's value.
/// - `None`: If the slice is not a digit.
fn parse_digit(lex: &logos::Lexer<Lexeme>) -> Option<u8> {
    lex.slice().parse().ok()
}

/// Returns the letter under the lexer cursor.
fn parse_letter(lex: &logos::Lexer<Lexeme>) -> Option<char> {
    lex.slice().chars().next()
}
