use std::net::SocketAddr;

use futures::channel::oneshot;
use futures::FutureExt;
use stats_service::{Config, Server};
use tokio::task::JoinHandle;

/// A server running on an ephemeral loopback port for the life of a test.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<stats_service::Result<()>>,
}

impl TestServer {
    pub fn start() -> Self {
        TestServer::start_with(Config::default())
    }

    pub fn start_with(config: Config) -> Self {
        let config = config.with_addr("127.0.0.1:0".parse().unwrap());
        let server = Server::bind(config).unwrap();
        let addr = server.local_addr().unwrap();

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.run_until(rx.map(|_| ())));

        TestServer {
            addr,
            shutdown: tx,
            handle,
        }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    pub async fn stop(self) {
        // Receiver only goes away once the server has already stopped
        let _ = self.shutdown.send(());
        let result = self.handle.await.unwrap();
        assert!(result.is_ok());
    }
}
