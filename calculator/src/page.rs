//! 计算器页面的渲染。

use calculator_core::{Number, Operator, Outcome};

/// 页面状态。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// 尚未提交，只显示表单。
    Initial,
    /// 已提交，显示表单和计算结果。
    Submitted(Outcome),
}

impl View {
    /// 渲染完整的HTML页面。
    pub fn render(&self) -> String {
        let mut operations = String::new();
        let mut options = String::new();
        for op in Operator::ALL {
            let label = op.label();
            operations.push_str(&format!("        <li>{label}</li>\n"));
            options.push_str(&format!(
                "            <option value=\"{}\">{label}</option>\n",
                op.symbol()
            ));
        }

        let outcome = match self {
            View::Initial => String::new(),
            View::Submitted(Ok(value)) => {
                format!("    <h2>Result: {}</h2>\n", Number(*value))
            }
            View::Submitted(Err(error)) => {
                format!("    <h2 style=\"color: red;\">Error: {error}</h2>\n")
            }
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Calculator</title>
</head>
<body>
    <h1>Welcome to the Calculator!</h1>
    <p>This calculator can perform the following operations:</p>
    <ul>
{operations}    </ul>

    <form method="post" action="/">
        <label for="num1">Enter the first number:</label>
        <input type="text" name="num1" id="num1" required><br><br>

        <label for="num2">Enter the second number:</label>
        <input type="text" name="num2" id="num2" required><br><br>

        <label for="operator">Choose an operator:</label>
        <select name="operator" id="operator" required>
{options}        </select><br><br>

        <input type="submit" value="Calculate">
    </form>
{outcome}</body>
</html>
"#
        )
    }
}
