/// Operator dispatch.
pub mod core;
/// Exponentiation.
pub mod power;
/// Addition, subtraction, multiplication and division.
pub mod scalar;
