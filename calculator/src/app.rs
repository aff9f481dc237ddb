//! 请求分派。

use bytes::Bytes;
use calculator_core::calculate;
use http::{header, HeaderValue, Method, Request, StatusCode};
use http_body::Body as HttpBody;

use crate::BoxError;
use crate::extract::{Form, FormError};
use crate::page::View;
use crate::response::{Html, IntoResponse, Response};

/// 默认的请求主体长度限制。
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024;

const ALLOWED_METHODS: &str = "GET, HEAD, POST";

/// 提交的表单字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 第一个操作数的文本。
    pub num1: String,
    /// 第二个操作数的文本。
    pub num2: String,
    /// 运算符的符号。
    pub operator: String,
}

impl Submission {
    /// 从表单键值对中取出字段，同名字段重复出现时使用第一个值。
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, FormError> {
        let mut num1 = None;
        let mut num2 = None;
        let mut operator = None;

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "num1" => &mut num1,
                "num2" => &mut num2,
                "operator" => &mut operator,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }

        Ok(Self {
            num1: num1.ok_or(FormError::MissingField("num1"))?,
            num2: num2.ok_or(FormError::MissingField("num2"))?,
            operator: operator.ok_or(FormError::MissingField("operator"))?,
        })
    }
}

/// 计算器应用，处理对`/`的请求。
///
/// 不持有可变状态，可以在多个连接之间共享。
#[derive(Debug, Clone)]
pub struct App {
    max_body_bytes: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// 使用默认配置创建应用。
    pub fn new() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// 设置请求主体的长度限制。
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// 处理请求。
    pub async fn call<B>(&self, req: Request<B>) -> Response
    where
        B: HttpBody<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        let res = self.dispatch(req).await;

        tracing::info!(%method, %path, status = res.status().as_u16(), "request");
        res
    }

    async fn dispatch<B>(&self, req: Request<B>) -> Response
    where
        B: HttpBody<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        if req.uri().path() != "/" {
            return StatusCode::NOT_FOUND.into_response();
        }

        match req.method() {
            &Method::GET | &Method::HEAD => Html(View::Initial.render()).into_response(),
            &Method::POST => self.submit(req).await,
            _ => {
                let mut res = StatusCode::METHOD_NOT_ALLOWED.into_response();
                res.headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
                res
            }
        }
    }

    async fn submit<B>(&self, req: Request<B>) -> Response
    where
        B: HttpBody<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let submission = match Form::<Vec<(String, String)>>::from_request(req, self.max_body_bytes)
            .await
            .and_then(|Form(pairs)| Submission::from_pairs(pairs))
        {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = %e, "rejected form");
                return e.into_response();
            }
        };

        let outcome = calculate(&submission.num1, &submission.num2, &submission.operator);
        tracing::debug!(?outcome, operator = %submission.operator, "calculated");

        Html(View::Submitted(outcome).render()).into_response()
    }
}
