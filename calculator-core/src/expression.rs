use crate::{CalcError, Operator};

/// 一次提交的计算结果，数值或错误二者之一。
pub type Outcome = Result<f64, CalcError>;

/// 已校验的二元表达式。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expression {
    /// 左操作数。
    pub lhs: f64,
    /// 运算符。
    pub operator: Operator,
    /// 右操作数。
    pub rhs: f64,
}

impl Expression {
    /// 创建表达式。
    pub fn new(lhs: f64, operator: Operator, rhs: f64) -> Self {
        Self { lhs, operator, rhs }
    }

    /// 从表单文本解析表达式。
    ///
    /// 先解析两个操作数，再解析运算符，所以操作数错误优先于运算符错误。
    pub fn parse(num1: &str, num2: &str, operator: &str) -> Result<Self, CalcError> {
        let lhs = parse_operand(num1)?;
        let rhs = parse_operand(num2)?;
        let operator = operator.parse()?;
        Ok(Self::new(lhs, operator, rhs))
    }

    /// 计算表达式的值。
    pub fn evaluate(&self) -> Outcome {
        if self.operator == Operator::Divide && self.rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        self.operator.apply(self.lhs, self.rhs)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

/// 将文本解析为操作数，忽略首尾空白。
///
/// 数字之间允许单个下划线分隔（`1_000`），Unicode十进制数字（如全角`１２`）
/// 按对应的ASCII数字处理。
pub fn parse_operand(text: &str) -> Result<f64, CalcError> {
    normalize(text.trim())
        .ok_or(CalcError::InvalidNumber)?
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber)
}

fn normalize(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().map(ascii_digit).collect();
    let mut normalized = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            normalized.push(c);
            continue;
        }
        let prev = i.checked_sub(1).and_then(|j| chars.get(j));
        let next = chars.get(i + 1);
        if !prev.is_some_and(char::is_ascii_digit) || !next.is_some_and(char::is_ascii_digit) {
            return None;
        }
    }

    Some(normalized)
}

/// Unicode中`Nd`类别各组数字`0`的码位，每组十个连续码位。
const DIGIT_ZEROS: [u32; 67] = [
    0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66, 0x0CE6,
    0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0,
    0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0, 0xA9F0,
    0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0, 0x112F0,
    0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0,
    0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn ascii_digit(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let code = u32::from(c);
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
        .unwrap_or(c)
}

/// 解析并计算一次表单提交。
pub fn calculate(num1: &str, num2: &str, operator: &str) -> Outcome {
    Expression::parse(num1, num2, operator)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands() {
        assert_eq!(parse_operand("3"), Ok(3.0));
        assert_eq!(parse_operand(" 2.5 "), Ok(2.5));
        assert_eq!(parse_operand("-1e3"), Ok(-1000.0));
        assert_eq!(parse_operand(".5"), Ok(0.5));
        assert_eq!(parse_operand("inf"), Ok(f64::INFINITY));
        assert!(parse_operand("nan").is_ok_and(f64::is_nan));
    }

    #[test]
    fn invalid_operands() {
        for text in ["abc", "", "   ", "1,5", "3 4", "0x10", "1.2.3"] {
            assert_eq!(parse_operand(text), Err(CalcError::InvalidNumber), "{text:?}");
        }
    }

    #[test]
    fn underscores_between_digits() {
        assert_eq!(parse_operand("1_000"), Ok(1000.0));
        assert_eq!(parse_operand("1_000.000_1"), Ok(1000.0001));
        assert_eq!(parse_operand("1e1_0"), Ok(1e10));
        assert_eq!(calculate("1_000", "1", "+"), Ok(1001.0));
    }

    #[test]
    fn misplaced_underscores() {
        for text in ["1__0", "_1", "1_", "_", "1_.5", "1._5", "1_e5"] {
            assert_eq!(parse_operand(text), Err(CalcError::InvalidNumber), "{text:?}");
        }
    }

    #[test]
    fn unicode_digits() {
        assert_eq!(parse_operand("１２"), Ok(12.0));
        assert_eq!(parse_operand("٣.٥"), Ok(3.5));
        assert_eq!(parse_operand("१_०००"), Ok(1000.0));
        assert_eq!(calculate("１２", "3", "*"), Ok(36.0));
    }

    #[test]
    fn scenarios() {
        assert_eq!(calculate("3", "4", "+"), Ok(7.0));
        assert_eq!(calculate("10", "0", "/"), Err(CalcError::DivisionByZero));
        assert_eq!(calculate("5", "2", "%"), Err(CalcError::InvalidOperator));
        assert_eq!(calculate("abc", "2", "*"), Err(CalcError::InvalidNumber));
        assert_eq!(calculate("6", "3", "-"), Ok(3.0));
    }

    #[test]
    fn invalid_number_before_operator() {
        assert_eq!(calculate("abc", "2", "%"), Err(CalcError::InvalidNumber));
        assert_eq!(calculate("1", "", "?"), Err(CalcError::InvalidNumber));
    }

    #[test]
    fn negative_zero_divisor() {
        assert_eq!(calculate("1", "-0", "/"), Err(CalcError::DivisionByZero));
        assert_eq!(calculate("1", "0.0", "/"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn zero_divisor_only_matters_for_division() {
        assert_eq!(calculate("1", "0", "+"), Ok(1.0));
        assert_eq!(calculate("1", "0", "-"), Ok(1.0));
        assert_eq!(calculate("1", "0", "*"), Ok(0.0));
    }

    #[test]
    fn matches_native_arithmetic() {
        let pairs = [(1.5, -2.25), (1e10, 3.0), (-7.0, 0.1), (0.0, 42.0)];
        for (a, b) in pairs {
            let (x, y) = (a.to_string(), b.to_string());
            assert_eq!(calculate(&x, &y, "+"), Ok(a + b));
            assert_eq!(calculate(&x, &y, "-"), Ok(a - b));
            assert_eq!(calculate(&x, &y, "*"), Ok(a * b));
            if b != 0.0 {
                assert_eq!(calculate(&x, &y, "/"), Ok(a / b));
            }
        }
    }

    #[test]
    fn display() {
        let expr = Expression::parse("1.5", "2", "*").unwrap();
        assert_eq!(expr, Expression::new(1.5, Operator::Multiply, 2.0));
        assert_eq!(expr.to_string(), "1.5 * 2");
    }
}
