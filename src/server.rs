use std::convert::Infallible;
use std::future::Future;
use std::net::{SocketAddr, TcpListener};

use hyper::server::conn::AddrStream;
use hyper::service::make_service_fn;
use log::{debug, info};
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::{service_fn, ServiceBuilder};

use crate::config::Config;
use crate::error::Result;
use crate::routes;

/// A bound, not yet serving, statistics server.
///
/// Binding and serving are split so callers can learn the real address
/// before any request is accepted, e.g. when binding to port `0`.
pub struct Server {
    listener: TcpListener,
    config: Config,
}

impl Server {
    pub fn bind(config: Config) -> Result<Self> {
        let listener = TcpListener::bind(config.addr())?;
        Ok(Server { listener, config })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Serve until the process is stopped.
    pub async fn run(self) -> Result<()> {
        self.run_until(futures::future::pending()).await
    }

    /// Serve until `signal` resolves, then finish in-flight requests and return.
    pub async fn run_until<F>(self, signal: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let addr = self.local_addr()?;
        // Shared by every connection so the cap is process-wide.
        let limit = GlobalConcurrencyLimitLayer::new(self.config.max_concurrency());

        let make_service = make_service_fn(move |conn: &AddrStream| {
            let remote = conn.remote_addr();
            let limit = limit.clone();
            async move {
                debug!("Accepted connection from {}", remote);
                let service = ServiceBuilder::new()
                    .layer(limit)
                    .service(service_fn(routes::handle));
                Ok::<_, Infallible>(service)
            }
        });

        let server = hyper::Server::from_tcp(self.listener)?.serve(make_service);
        info!("Server is running on http://localhost:{}", addr.port());

        server.with_graceful_shutdown(signal).await?;
        info!("Server on port {} shut down", addr.port());
        Ok(())
    }
}
