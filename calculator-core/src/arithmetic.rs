//! 四则运算。

use crate::CalcError;

/// 加法。
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// 减法。
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// 乘法。
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// 除法。
///
/// 除数为零（包括`-0.0`）时返回[`CalcError::DivisionByZero`]。
#[inline]
pub fn divide(a: f64, b: f64) -> Result<f64, CalcError> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
