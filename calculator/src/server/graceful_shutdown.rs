use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::watch::{self, Receiver, Sender};
use tokio_util::sync::CancellationToken;

/// 优雅关机，用于等待服务器完成剩余请求。
///
/// 每个连接持有一个[`Monitor`]，所有`Monitor`被释放后即表示连接全部结束。
#[derive(Debug)]
pub struct GracefulShutdown {
    tx: Sender<()>,
    rx: Receiver<()>,
    token: CancellationToken,
}

#[derive(Debug, Clone)]
pub(super) struct Monitor {
    _rx: Receiver<()>,
    token: CancellationToken,
}

impl Monitor {
    /// 驱动连接直到结束，收到关机信号时先通知连接停止接收新请求。
    pub(super) async fn watch<T>(self, conn: T, shutdown: impl FnOnce(Pin<&mut T>)) -> T::Output
    where
        T: Future,
    {
        let mut conn = std::pin::pin!(conn);

        tokio::select! {
            _ = self.token.cancelled() => {
                shutdown(conn.as_mut());
                conn.await
            }
            output = conn.as_mut() => output
        }
    }
}

impl GracefulShutdown {
    pub(super) fn new() -> Self {
        let (tx, rx) = watch::channel(());
        Self {
            tx,
            rx,
            token: CancellationToken::new(),
        }
    }

    pub(super) fn monitor(&self) -> Monitor {
        Monitor {
            _rx: self.rx.clone(),
            token: self.token.clone(),
        }
    }

    /// 仍在处理中的连接数。
    pub fn connections(&self) -> usize {
        self.tx.receiver_count().saturating_sub(1)
    }

    /// 发出关机信号，在指定时间内等待服务器完成剩余请求。
    ///
    /// 超时时间为`None`时一直等待。返回`true`表示所有连接都已结束，
    /// 返回`false`表示等待超时。
    pub async fn shutdown(self, timeout: Option<Duration>) -> bool {
        let connections = self.connections();
        let GracefulShutdown { tx, rx, token } = self;

        tracing::info!(connections, ?timeout, "draining connections");

        drop(rx);
        token.cancel();

        tokio::select! {
            _ = tx.closed() => true,
            _ = sleep(timeout) => {
                tracing::warn!(connections = tx.receiver_count(), "graceful shutdown timed out");
                false
            }
        }
    }
}

async fn sleep(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}
