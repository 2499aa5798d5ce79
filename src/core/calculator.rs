use crate::utils::error::{Result, SampleError};

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Difference of two integers.
pub fn subtract(a: i64, b: i64) -> i64 {
    a - b
}

/// Product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}

/// Quotient of two integers. A zero divisor is an error, not a panic.
pub fn divide(a: i64, b: i64) -> Result<f64> {
    if b == 0 {
        return Err(SampleError::DivisionByZero);
    }
    Ok(a as f64 / b as f64)
}
