use std::fmt;

/// 用于展示计算结果的数字。
///
/// 整数值保留一位小数（`7.0`），十进制指数小于`-4`或不小于`16`时使用科学计数法
/// （`1e+16`、`1.5e-05`），非有限值显示为`inf`、`-inf`、`nan`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }

        let scientific = format!("{value:e}");
        let Some((mantissa, exponent)) = scientific
            .split_once('e')
            .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
        else {
            return write!(f, "{value}");
        };

        if (-4..16).contains(&exponent) {
            let plain = value.to_string();
            if plain.contains('.') {
                f.write_str(&plain)
            } else {
                write!(f, "{plain}.0")
            }
        } else {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::Number;

    fn show(value: f64) -> String {
        Number(value).to_string()
    }

    #[test]
    fn integral() {
        assert_eq!(show(7.0), "7.0");
        assert_eq!(show(3.0), "3.0");
        assert_eq!(show(-12.0), "-12.0");
        assert_eq!(show(0.0), "0.0");
        assert_eq!(show(-0.0), "-0.0");
        assert_eq!(show(1e15), "1000000000000000.0");
    }

    #[test]
    fn fractional() {
        assert_eq!(show(2.5), "2.5");
        assert_eq!(show(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(show(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(show(0.0001), "0.0001");
    }

    #[test]
    fn scientific() {
        assert_eq!(show(1e16), "1e+16");
        assert_eq!(show(1.5e-5), "1.5e-05");
        assert_eq!(show(-2.5e20), "-2.5e+20");
        assert_eq!(show(1e-100), "1e-100");
        assert_eq!(show(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn non_finite() {
        assert_eq!(show(f64::INFINITY), "inf");
        assert_eq!(show(f64::NEG_INFINITY), "-inf");
        assert_eq!(show(f64::NAN), "nan");
    }
}
