//! Server Module
//!
//! Turnkey composition of one cache engine and its optional HTTP listener.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::cache::{Cache, CacheValue};
use crate::config::Config;

// == Server ==
/// A cache engine plus, when enabled, an HTTP front end over it.
///
/// With HTTP disabled the cache is still fully usable through
/// [`Server::cache`].
pub struct Server {
    config: Config,
    cache: Arc<Cache<CacheValue>>,
}

impl Server {
    /// Creates the cache engine and starts its sweeper.
    ///
    /// No socket is opened until [`Server::run`] or [`Server::serve_on`].
    ///
    /// # Panics
    /// Panics if called outside of a Tokio runtime.
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(Cache::new(config.cache.clone()));
        Self { config, cache }
    }

    /// Direct access to the underlying cache.
    pub fn cache(&self) -> &Arc<Cache<CacheValue>> {
        &self.cache
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn http_enabled(&self) -> bool {
        self.config.http.enabled
    }

    /// Listen address for the configured port.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.config.http.port))
    }

    /// Router over this server's cache, or None when HTTP is disabled.
    pub fn router(&self) -> Option<Router> {
        self.http_enabled()
            .then(|| create_router(AppState::new(Arc::clone(&self.cache))))
    }

    /// Runs until `shutdown` resolves, then stops the sweeper.
    ///
    /// Binds the configured port when HTTP is enabled; otherwise no listener
    /// is created and this only waits for `shutdown`.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.http_enabled() {
            info!("HTTP disabled, cache running embedded only");
            shutdown.await;
            self.cache.shutdown().await;
            return Ok(());
        }

        let listener = TcpListener::bind(self.addr()).await?;
        self.serve_on(listener, shutdown).await
    }

    /// Serves HTTP on an already bound listener until `shutdown` resolves,
    /// then stops the sweeper.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = create_router(AppState::new(Arc::clone(&self.cache)));
        info!("Server listening on http://{}", listener.local_addr()?);

        let result = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await;

        self.cache.shutdown().await;
        info!("Server stopped");
        result
    }
}
