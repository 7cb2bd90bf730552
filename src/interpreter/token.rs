use std::{fmt, ops::Deref};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Returns the reduction level that applies this operator.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Pow => Precedence::Power,
            Self::Mul | Self::Div => Precedence::Product,
            Self::Add | Self::Sub => Precedence::Sum,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operator precedence levels, highest first.
///
/// The evaluator runs one collapse pass per level in this order. Operators
/// that share a level are applied in the order they appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `^`
    Power,
    /// `*` and `/`
    Product,
    /// `+` and `-`
    Sum,
}

impl Precedence {
    /// All levels in the order the evaluator reduces them.
    pub const ALL: [Self; 3] = [Self::Power, Self::Product, Self::Sum];
}

/// Represents one unit of a tokenized expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal, with any leading sign already folded in.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A reference to a stored variable.
    Variable(char),
}

/// The shape of a token, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// [`Token::Number`]
    Number,
    /// [`Token::Operator`]
    Operator,
    /// [`Token::LeftParen`]
    LeftParen,
    /// [`Token::RightParen`]
    RightParen,
    /// [`Token::Variable`]
    Variable,
}

impl Token {
    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Number(_) => TokenKind::Number,
            Self::Operator(_) => TokenKind::Operator,
            Self::LeftParen => TokenKind::LeftParen,
            Self::RightParen => TokenKind::RightParen,
            Self::Variable(_) => TokenKind::Variable,
        }
    }
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::Variable(name) => write!(f, "{name}"),
        }
    }
}

/// An ordered sequence of tokens produced by the tokenizer.
///
/// A tokenized `Expression` is never empty, never starts or ends with an
/// operator, has balanced parentheses and never holds two operators side by
/// side. It dereferences to `[Token]`, which is what the evaluator consumes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Returns the tokens as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the expression and returns its tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl From<Vec<Token>> for Expression {
    fn from(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

impl Deref for Expression {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
