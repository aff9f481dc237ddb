use bytes::Bytes;
use http::{header, HeaderMap, Request, StatusCode};
use http_body::Body as HttpBody;
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::de::DeserializeOwned;

use crate::BoxError;
use crate::response::{IntoResponse, Response};

/// 表单提取器，从`application/x-www-form-urlencoded`请求主体中反序列化数据。
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

impl<T> Form<T>
where
    T: DeserializeOwned,
{
    /// 缓冲请求主体并反序列化，主体最多读取`limit`字节。
    pub async fn from_request<B>(req: Request<B>, limit: usize) -> Result<Self, FormError>
    where
        B: HttpBody<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        if !has_content_type(req.headers(), &mime::APPLICATION_WWW_FORM_URLENCODED) {
            return Err(FormError::UnsupportedContentType);
        }

        let bytes = Limited::new(req.into_body(), limit)
            .collect()
            .await
            .map_err(FormError::from_body_error)?
            .to_bytes();

        serde_urlencoded::from_bytes::<T>(&bytes)
            .map(Form)
            .map_err(FormError::FailedToDeserialize)
    }
}

fn has_content_type(headers: &HeaderMap, expected: &mime::Mime) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    let Ok(content_type) = content_type.parse::<mime::Mime>() else {
        return false;
    };

    content_type.essence_str() == expected.essence_str()
}

/// 表单提取错误。
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// 不支持的内容类型。
    #[error("unsupported content type")]
    UnsupportedContentType,
    /// 请求主体超过长度限制。
    #[error("payload too large")]
    PayloadTooLarge,
    /// 缓冲主体失败。
    #[error("failed to buffer body ({0})")]
    FailedToBufferBody(BoxError),
    /// 反序列化失败。
    #[error("failed to deserialize form ({0})")]
    FailedToDeserialize(serde_urlencoded::de::Error),
    /// 缺少必需的字段。
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

impl FormError {
    fn from_body_error(error: BoxError) -> Self {
        if error.is::<LengthLimitError>() {
            FormError::PayloadTooLarge
        } else {
            FormError::FailedToBufferBody(error)
        }
    }

    /// 错误对应的响应状态码。
    pub fn status(&self) -> StatusCode {
        match self {
            FormError::UnsupportedContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            FormError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            FormError::FailedToBufferBody(_)
            | FormError::FailedToDeserialize(_)
            | FormError::MissingField(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for FormError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
