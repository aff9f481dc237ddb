//! 日志初始化。
//!
//! 设置了`RUST_LOG`环境变量时以其为准，否则使用配置的级别。

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// 初始化全局日志订阅器，重复调用时只有第一次生效。
///
/// 未设置`RUST_LOG`且`default_level`不是合法的过滤指令时返回错误。
pub fn init(default_level: &str) -> Result<(), ParseError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn invalid_level() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(init("calculator=loud").is_err());
        }
    }
}
