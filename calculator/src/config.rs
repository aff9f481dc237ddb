//! 命令行与环境变量配置。

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::DEFAULT_MAX_BODY_BYTES;

/// 服务配置，命令行参数优先于环境变量。
#[derive(Debug, Clone, Parser)]
#[command(name = "calculator", version, about = "单页表单计算器服务")]
pub struct Config {
    /// 监听的主机地址
    #[arg(long, env = "CALCULATOR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// 监听的端口
    #[arg(long, env = "CALCULATOR_PORT", default_value_t = 5000)]
    pub port: u16,

    /// 优雅关机时等待剩余请求的秒数
    #[arg(
        long = "shutdown-timeout",
        env = "CALCULATOR_SHUTDOWN_TIMEOUT",
        value_name = "SECONDS",
        default_value_t = 30
    )]
    pub shutdown_timeout_secs: u64,

    /// 请求主体的最大字节数
    #[arg(long, env = "CALCULATOR_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// 日志级别，设置`RUST_LOG`时以其为准
    #[arg(
        long,
        env = "CALCULATOR_LOG",
        default_value = "info",
        value_parser = parse_log_filter
    )]
    pub log_level: String,
}

fn parse_log_filter(s: &str) -> Result<String, String> {
    EnvFilter::try_new(s)
        .map(|_| s.to_owned())
        .map_err(|e| e.to_string())
}

impl Config {
    /// 监听地址。
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// 优雅关机的超时时间。
    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
