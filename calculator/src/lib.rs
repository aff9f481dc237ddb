//! 单页表单计算器服务。

#![forbid(unsafe_code)]
#![deny(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

pub mod app;
pub mod config;
pub mod extract;
pub mod listener;
pub mod logging;
pub mod page;
pub mod response;
pub mod server;

pub use app::App;

/// 类型擦除的错误类型别名
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
