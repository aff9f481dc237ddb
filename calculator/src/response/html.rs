use http::{header, HeaderValue};

use super::{IntoResponse, Response};

/// HTML响应。
///
/// 设置响应标头`Content-Type: text/html; charset=utf-8`。
#[derive(Debug, Clone, Copy)]
pub struct Html<T>(pub T);

impl<T> IntoResponse for Html<T>
where
    T: IntoResponse,
{
    fn into_response(self) -> Response {
        let mut res = self.0.into_response();
        res.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(mime::TEXT_HTML_UTF_8.as_ref()),
        );
        res
    }
}

#[cfg(test)]
mod tests {
    use http::header;

    use super::Html;
    use crate::response::IntoResponse;

    #[test]
    fn content_type() {
        let res = Html("<p>hi</p>").into_response();
        assert_eq!(
            res.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
