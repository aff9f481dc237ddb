use std::str::FromStr;

use crate::CalcError;
use crate::arithmetic;

/// 运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// 加法`+`。
    Add,
    /// 减法`-`。
    Subtract,
    /// 乘法`*`。
    Multiply,
    /// 除法`/`。
    Divide,
}

impl Operator {
    /// 所有运算符，按页面展示的顺序排列。
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// 运算符的符号。
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// 运算的名称。
    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// 带符号的标签，例如`Addition (+)`。
    pub fn label(self) -> String {
        format!("{} ({})", self.name(), self.symbol())
    }

    /// 对两个操作数执行运算。
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(arithmetic::add(a, b)),
            Operator::Subtract => Ok(arithmetic::subtract(a, b)),
            Operator::Multiply => Ok(arithmetic::multiply(a, b)),
            Operator::Divide => arithmetic::divide(a, b),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or(CalcError::InvalidOperator)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Operator;
    use crate::CalcError;

    #[test]
    fn parse_symbols() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("-".parse::<Operator>(), Ok(Operator::Subtract));
        assert_eq!("*".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!("/".parse::<Operator>(), Ok(Operator::Divide));
    }

    #[test]
    fn parse_unknown() {
        for s in ["%", "", " +", "x", "add", "//", "^"] {
            assert_eq!(s.parse::<Operator>(), Err(CalcError::InvalidOperator));
        }
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Operator::ALL.into_iter().map(Operator::label).collect();
        assert_eq!(
            labels,
            [
                "Addition (+)",
                "Subtraction (-)",
                "Multiplication (*)",
                "Division (/)"
            ]
        );
    }

    #[test]
    fn apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operator::Subtract.apply(6.0, 3.0), Ok(3.0));
        assert_eq!(Operator::Multiply.apply(-2.0, 4.0), Ok(-8.0));
        assert_eq!(Operator::Divide.apply(1.0, 4.0), Ok(0.25));
        assert_eq!(
            Operator::Divide.apply(1.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }
}
