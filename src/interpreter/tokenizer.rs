use logos::Logos;
use tracing::debug;

use crate::{
    error::ExpressionError,
    interpreter::{
        lexer::Lexeme,
        store::VariableStore,
        token::{Expression, Operator, Token, TokenKind},
    },
};

/// Result type used by the tokenizer.
pub type TokenizeResult<T> = Result<T, ExpressionError>;

/// Longest run of operator characters accepted, such as the `+-` in `12+-6`.
pub const MAX_OPERATOR_RUN: usize = 2;

/// Adjacent token kinds that have a multiplication implied between them.
///
/// `5(4)` reads as `5*(4)`, `(4)6` as `(4)*6`, `2x` as `2*x` and `xy` as
/// `x*y`.
const IMPLIED_MULTIPLICATION: [(TokenKind, TokenKind); 8] =
    [(TokenKind::Number, TokenKind::Variable),
     (TokenKind::Number, TokenKind::LeftParen),
     (TokenKind::Variable, TokenKind::Number),
     (TokenKind::Variable, TokenKind::Variable),
     (TokenKind::Variable, TokenKind::LeftParen),
     (TokenKind::RightParen, TokenKind::Number),
     (TokenKind::RightParen, TokenKind::Variable),
     (TokenKind::RightParen, TokenKind::LeftParen)];

/// Converts a line of text into an [`Expression`].
///
/// The scan runs once from left to right. Digits accumulate into a pending
/// number; whitespace is skipped anywhere, even between digits. Runs of up to
/// two operators are resolved: after an operator or `(` a `-` negates the
/// next number and a `+` is dropped. The sign is carried into a following
/// group, so `-(3+4)` negates the `3` alone. A multiplication is inserted
/// between adjacent operands, so `5(4)` becomes `5 * ( 4 )`. Unclosed
/// parentheses are closed at the end of the line.
///
/// Letters are only accepted if they name a variable already in `store`.
///
/// # Parameters
/// - `line`: The text to tokenize.
/// - `store`: The variables that may be referenced.
///
/// # Returns
/// The token sequence of the line.
///
/// # Errors
/// Returns an [`ExpressionError`] if the line is blank, contains an
/// unsupported character or unknown variable, has too many operators in a
/// row, starts or ends with an operator, or closes more parentheses than it
/// opens.
///
/// # Example
/// ```
/// use linecalc::interpreter::{
///     store::VariableStore,
///     token::{Operator, Token},
///     tokenizer::tokenize,
/// };
///
/// let store = VariableStore::new();
/// let expression = tokenize("12+-6", &store).unwrap();
/// assert_eq!(expression.as_slice(),
///            &[Token::Number(12.0), Token::Operator(Operator::Add), Token::Number(-6.0)]);
///
/// assert!(tokenize("12+++6", &store).is_err());
/// ```
pub fn tokenize(line: &str, store: &VariableStore) -> TokenizeResult<Expression> {
    if line.trim().is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut tokenizer = Tokenizer::new(store);
    let mut lexer = Lexeme::lexer(line);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(lexeme) => tokenizer.feed(lexeme)?,
            Err(()) => {
                let ch = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ExpressionError::UnsupportedCharacter { ch });
            },
        }
    }

    let expression = tokenizer.finish()?;
    debug!(line, %expression, "tokenized line");
    Ok(expression)
}

/// Returns `true` if a multiplication belongs between `prev` and `next`.
fn implies_multiplication(prev: &Token, next: &Token) -> bool {
    IMPLIED_MULTIPLICATION.contains(&(prev.kind(), next.kind()))
}

/// Scan state for a single line.
struct Tokenizer<'a> {
    store:        &'a VariableStore,
    tokens:       Vec<Token>,
    /// Digits seen since the last non-digit, as a value.
    pending:      Option<f64>,
    /// A `-` sign waiting for the next operand.
    negate:       bool,
    /// `(` seen without a matching `)`.
    open_parens:  usize,
    /// Consecutive operator characters, counting a leading `(`.
    operator_run: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(store: &'a VariableStore) -> Self {
        Self { store,
               tokens: Vec::new(),
               pending: None,
               negate: false,
               open_parens: 0,
               operator_run: 0 }
    }

    fn feed(&mut self, lexeme: Lexeme) -> TokenizeResult<()> {
        match lexeme {
            Lexeme::Digit(digit) => {
                let value = self.pending.unwrap_or(0.0);
                self.pending = Some(value.mul_add(10.0, f64::from(digit)));
                self.operator_run = 0;
                Ok(())
            },
            Lexeme::Letter(name) => self.variable(name),
            Lexeme::LParen => self.open_group(),
            Lexeme::RParen => self.close_group(),
            Lexeme::Plus => self.operator(Operator::Add),
            Lexeme::Minus => self.operator(Operator::Sub),
            Lexeme::Star => self.operator(Operator::Mul),
            Lexeme::Slash => self.operator(Operator::Div),
            Lexeme::Caret => self.operator(Operator::Pow),
            Lexeme::Ignored => Ok(()),
        }
    }

    /// Appends `token`, inserting an implied `*` first if needed.
    fn push(&mut self, token: Token) {
        if let Some(prev) = self.tokens.last()
           && implies_multiplication(prev, &token)
        {
            self.tokens.push(Token::Operator(Operator::Mul));
        }
        self.tokens.push(token);
    }

    /// Emits the pending number, if any, with the pending sign applied.
    fn flush_number(&mut self) -> TokenizeResult<()> {
        if let Some(value) = self.pending.take() {
            if !value.is_finite() {
                return Err(ExpressionError::LiteralTooLarge);
            }
            let value = if std::mem::take(&mut self.negate) { -value } else { value };
            self.push(Token::Number(value));
        }
        Ok(())
    }

    /// Emits a pending sign in front of a variable as `-1 *`.
    fn flush_sign(&mut self) {
        if std::mem::take(&mut self.negate) {
            self.push(Token::Number(-1.0));
            self.push(Token::Operator(Operator::Mul));
        }
    }

    fn variable(&mut self, name: char) -> TokenizeResult<()> {
        if !self.store.has(name) {
            return Err(ExpressionError::UnsupportedCharacter { ch: name });
        }
        self.flush_number()?;
        self.flush_sign();
        self.push(Token::Variable(name));
        self.operator_run = 0;
        Ok(())
    }

    /// A pending sign is kept across `(` and folds into the group's first
    /// operand.
    fn open_group(&mut self) -> TokenizeResult<()> {
        self.flush_number()?;
        self.push(Token::LeftParen);
        self.open_parens += 1;
        self.operator_run = 1;
        Ok(())
    }

    fn close_group(&mut self) -> TokenizeResult<()> {
        self.flush_number()?;
        self.open_parens =
            self.open_parens.checked_sub(1).ok_or(ExpressionError::UnbalancedParentheses)?;
        match self.tokens.last() {
            Some(Token::LeftParen) => return Err(ExpressionError::EmptyGroup),
            Some(Token::Operator(_)) | None => return Err(ExpressionError::TrailingOperator),
            _ => {},
        }
        self.push(Token::RightParen);
        self.operator_run = 0;
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> TokenizeResult<()> {
        self.flush_number()?;
        self.operator_run += 1;

        let leading = matches!(self.tokens.last(),
                               None | Some(Token::Operator(_) | Token::LeftParen));
        if !leading {
            self.push(Token::Operator(op));
            return Ok(());
        }

        if self.operator_run > MAX_OPERATOR_RUN {
            return Err(ExpressionError::TooManyOperators);
        }
        match op {
            Operator::Sub => self.negate = true,
            Operator::Add => {},
            _ if self.tokens.is_empty() => {
                return Err(ExpressionError::LeadingOperator { op: op.symbol() });
            },
            _ => return Err(ExpressionError::TooManyOperators),
        }
        Ok(())
    }

    fn finish(mut self) -> TokenizeResult<Expression> {
        self.flush_number()?;
        if !matches!(self.tokens.last(),
                     Some(Token::Number(_) | Token::Variable(_) | Token::RightParen))
        {
            return Err(ExpressionError::TrailingOperator);
        }

        for _ in 0..self.open_parens {
            self.tokens.push(Token::RightParen);
        }
        Ok(Expression::from(self.tokens))
    }
}
