//! 监听器的特征和相关类型的定义。

use std::future::Future;
use std::io;
use std::net::SocketAddr;

/// 表示可以提供连接的类型，用于实现监听器。
pub trait Listener {
    /// 监听器返回的连接。
    type IO;

    /// 监听器产生的错误。
    type Error;

    /// 接收此监听器新传入的连接，同时返回远程地址。
    fn accept(
        &mut self,
    ) -> impl Future<Output = Result<(Self::IO, SocketAddr), Self::Error>> + Send;

    /// 监听器绑定的本地地址。
    fn local_addr(&self) -> Result<SocketAddr, Self::Error>;
}

impl Listener for tokio::net::TcpListener {
    type IO = tokio::net::TcpStream;
    type Error = io::Error;

    async fn accept(&mut self) -> io::Result<(Self::IO, SocketAddr)> {
        tokio::net::TcpListener::accept(self).await
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        tokio::net::TcpListener::local_addr(self)
    }
}
