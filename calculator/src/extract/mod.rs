//! 从请求中提取数据的类型。

mod form;

pub use form::{Form, FormError};
