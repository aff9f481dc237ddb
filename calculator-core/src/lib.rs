//! `calculator`的核心类型和运算。

#![forbid(unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unreachable_pub
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

pub mod arithmetic;

mod error;
mod expression;
mod number;
mod operator;

pub use error::CalcError;
pub use expression::{calculate, parse_operand, Expression, Outcome};
pub use number::Number;
pub use operator::Operator;
