//! # linecalc
//!
//! linecalc is a line-oriented arithmetic calculator written in Rust.
//! It tokenizes a single line of text, resolving signs, operator runs and
//! implied multiplication, and evaluates it by collapsing operators one
//! precedence level at a time. Single-letter variables persist across lines of
//! a [`Session`](interpreter::session::Session).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{evaluator::core::evaluate, store::VariableStore, tokenizer::tokenize},
};

/// Provides unified error types for tokenizing, assigning and evaluating.
///
/// Every failure of a line is reported through [`CalcError`], which wraps the
/// error of the stage that rejected it. None of these errors end a session.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, assignment,
///   evaluator).
/// - Carries the offending character, operator or limit where one exists.
pub mod error;
/// Contains everything needed to turn a line of text into a number.
///
/// This module ties together the lexer, tokenizer, evaluator, assignment
/// parser and variable table, and exposes the [`Session`] that drives them one
/// line at a time.
///
/// # Responsibilities
/// - Coordinates tokenizing and evaluation of expression lines.
/// - Parses assignment lines and stores their values.
/// - Manages the flow of data and errors between phases.
///
/// [`Session`]: interpreter::session::Session
pub mod interpreter;

/// Evaluates a single expression line with no variables defined.
///
/// This is a shortcut for tokenizing and evaluating `line` against an empty
/// variable table. Use a [`Session`](interpreter::session::Session) to keep
/// variables between lines.
///
/// # Errors
/// Returns an error if the line is not a valid expression or cannot be
/// computed.
///
/// # Examples
/// ```
/// use linecalc::calculate;
///
/// assert_eq!(calculate("12+6").unwrap(), 18.0);
/// assert_eq!(calculate("(5+3)/-2").unwrap(), -4.0);
/// assert_eq!(calculate("2^3^2").unwrap(), 64.0);
///
/// // Too many operators in a row.
/// assert!(calculate("12+++6").is_err());
/// // Division by zero.
/// assert!(calculate("12/0").is_err());
/// ```
pub fn calculate(line: &str) -> Result<f64, CalcError> {
    let store = VariableStore::new();
    let expression = tokenize(line, &store)?;
    Ok(evaluate(&expression, &store)?)
}
