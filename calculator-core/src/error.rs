/// 计算错误。
///
/// 错误的显示文本会原样展示给用户。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalcError {
    /// 操作数无法解析为数字。
    #[error("Invalid input. Please enter valid numbers.")]
    InvalidNumber,
    /// 除数为零。
    #[error("Division by zero is not allowed.")]
    DivisionByZero,
    /// 不支持的运算符。
    #[error("Invalid operator.")]
    InvalidOperator,
}

#[cfg(test)]
mod tests {
    use super::CalcError;

    #[test]
    fn messages() {
        assert_eq!(
            CalcError::InvalidNumber.to_string(),
            "Invalid input. Please enter valid numbers."
        );
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Division by zero is not allowed."
        );
        assert_eq!(CalcError::InvalidOperator.to_string(), "Invalid operator.");
    }
}
