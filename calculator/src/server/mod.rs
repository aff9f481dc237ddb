//! HTTP服务器。

mod graceful_shutdown;
pub use graceful_shutdown::GracefulShutdown;

use std::convert::Infallible;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::App;
use crate::listener::Listener;

/// HTTP服务器。
pub struct Server<L> {
    listener: L,
    builder: Builder<TokioExecutor>,
}

impl<L> std::fmt::Debug for Server<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Server")
            .field("listener", &std::any::type_name::<L>())
            .field("builder", &self.builder)
            .finish()
    }
}

impl<L> Server<L>
where
    L: Listener,
    L::IO: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    /// 使用指定的监听器创建服务器。
    pub fn new(listener: L) -> Self {
        Self {
            listener,
            builder: Builder::new(TokioExecutor::new()),
        }
    }

    /// 运行服务器。
    pub async fn run(&mut self, app: App) -> Result<(), RunError<L::Error>> {
        self.run_with_graceful_shutdown(app, std::future::pending())
            .await
    }

    /// 运行服务器，并设置关机信号用于启动优雅关机。
    ///
    /// 信号返回的时长是等待剩余请求完成的最长时间，`None`表示一直等待。
    pub async fn run_with_graceful_shutdown<G>(
        &mut self,
        app: App,
        signal: G,
    ) -> Result<(), RunError<L::Error>>
    where
        G: Future<Output = Option<Duration>> + Send + 'static,
    {
        let mut signal = std::pin::pin!(signal);
        let app = Arc::new(app);
        let graceful = GracefulShutdown::new();

        let timeout = loop {
            tokio::select! {
                timeout = signal.as_mut() => {
                    break timeout;
                }
                incoming = self.listener.accept() => {
                    let (conn, remote) = match incoming {
                        Ok(value) => value,
                        Err(e) => return Err(RunError::Listener(e, graceful)),
                    };
                    tracing::debug!(%remote, "accepted connection");

                    let app = Arc::clone(&app);
                    let service = service_fn(move |req: hyper::Request<Incoming>| {
                        let app = Arc::clone(&app);
                        async move { Ok::<_, Infallible>(app.call(req).await) }
                    });

                    let builder = self.builder.clone();
                    let monitor = graceful.monitor();

                    tokio::spawn(async move {
                        let conn = builder.serve_connection(TokioIo::new(conn), service);
                        let result = monitor.watch(conn, |conn| conn.graceful_shutdown()).await;
                        if let Err(e) = result {
                            tracing::debug!(%remote, error = %e, "connection error");
                        }
                    });
                }
            }
        };

        if !graceful.shutdown(timeout).await {
            return Err(RunError::GracefulShutdownTimeout);
        }

        Ok(())
    }
}

/// 服务器运行错误。
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    /// 优雅关机超时。
    #[error("server graceful shutdown timeout")]
    GracefulShutdownTimeout,
    /// 监听器发生错误，附带用于等待剩余请求的[`GracefulShutdown`]。
    #[error("the server encountered an error while running ({0})")]
    Listener(E, GracefulShutdown),
}
