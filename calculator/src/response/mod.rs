//! HTTP响应的类型和特征。

mod html;

pub use html::Html;

use std::borrow::Cow;

use bytes::Bytes;
use http::{header, HeaderValue, StatusCode};
use http_body_util::Full;

/// 响应主体。
pub type Body = Full<Bytes>;

/// HTTP响应。
pub type Response = http::Response<Body>;

/// 可以转换为响应的类型。
pub trait IntoResponse {
    /// 转换为响应。
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Cow::Borrowed(self).into_response()
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Cow::<'static, str>::Owned(self).into_response()
    }
}

impl IntoResponse for Cow<'static, str> {
    fn into_response(self) -> Response {
        let body = match self {
            Cow::Borrowed(s) => Body::from(s),
            Cow::Owned(s) => Body::from(s),
        };
        let mut res = Response::new(body);
        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::TEXT_PLAIN_UTF_8.as_ref()),
        );
        res
    }
}

/// 以状态码的规范文本作为主体，例如`404 Not Found`。
impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        (self, self.to_string()).into_response()
    }
}

impl<T> IntoResponse for (StatusCode, T)
where
    T: IntoResponse,
{
    fn into_response(self) -> Response {
        let (status, inner) = self;
        let mut res = inner.into_response();
        *res.status_mut() = status;
        res
    }
}
