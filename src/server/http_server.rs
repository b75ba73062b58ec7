//! HTTP server implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::request::{request_from_reader_with_capacity, Request};
use crate::response::Writer;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::handler::{handler_fn, HandlerFn, ResponseSink, ResponseWriter};

/// A running HTTP server.
///
/// Each accepted connection is served on its own task: one request is read, the
/// handler writes one response, and the connection is closed.
pub struct Server {
    local_addr: SocketAddr,
    listening: Arc<AtomicBool>,
    stop: Arc<Notify>,
    accept_loop: JoinHandle<()>,
}

impl Server {
    /// Bind to `config.addr` and start accepting connections in the background.
    pub async fn serve<F, Fut>(config: ServerConfig, handler: F) -> Result<Self, Error>
    where
        F: Fn(ResponseWriter, Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), Error>> + Send + 'static,
    {
        Self::serve_with(config, handler_fn(handler)).await
    }

    /// Like [`Server::serve`], with an already boxed handler.
    pub async fn serve_with(config: ServerConfig, handler: HandlerFn) -> Result<Self, Error> {
        let listener = TcpListener::bind(config.addr).await?;
        let local_addr = listener.local_addr()?;
        info!("Server listening on http://{local_addr}");

        let listening = Arc::new(AtomicBool::new(true));
        let stop = Arc::new(Notify::new());
        let accept_loop = tokio::spawn(Self::accept_loop(
            listener,
            listening.clone(),
            stop.clone(),
            handler,
            config.read_buffer_size,
        ));

        Ok(Self {
            local_addr,
            listening,
            stop,
            accept_loop,
        })
    }

    /// The address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Stop accepting connections.
    ///
    /// Returns `true` if this call stopped the server and `false` if it was already
    /// stopped. Connections that were already accepted run to completion.
    pub fn close(&self) -> bool {
        if self
            .listening
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        self.stop.notify_one();
        true
    }

    /// Close the server and wait for the accept loop to release the listener.
    pub async fn shutdown(self) -> Result<(), Error> {
        self.close();
        self.accept_loop
            .await
            .map_err(|e| Error::InternalError(format!("accept loop failed: {e}")))
    }

    async fn accept_loop(
        listener: TcpListener,
        listening: Arc<AtomicBool>,
        stop: Arc<Notify>,
        handler: HandlerFn,
        read_buffer_size: usize,
    ) {
        while listening.load(Ordering::Acquire) {
            tokio::select! {
                _ = stop.notified() => {}
                accepted = listener.accept() => match accepted {
                    Ok((socket, addr)) => {
                        debug!("Connection accepted from {addr}");
                        let handler = handler.clone();
                        tokio::spawn(async move {
                            if let Err(e) = Self::handle_connection(socket, handler, read_buffer_size).await {
                                warn!("Error handling connection from {addr}: {e}");
                            }
                        });
                    }
                    Err(e) => {
                        if !listening.load(Ordering::Acquire) {
                            break;
                        }
                        error!("Error accepting connection: {e}");
                        // Avoid spinning on persistent errors such as fd exhaustion.
                        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    }
                }
            }
        }
        info!("Server stopped listening");
    }

    /// Serve a single connection.
    ///
    /// Reads one request and hands it to `handler` along with a response writer over
    /// the connection. If the request cannot be read or parsed, the error is returned
    /// and nothing is written.
    pub async fn handle_connection<S>(
        stream: S,
        handler: HandlerFn,
        read_buffer_size: usize,
    ) -> Result<(), Error>
    where
        S: AsyncRead + AsyncWrite + Send + Unpin + 'static,
    {
        let (mut reader, sink) = tokio::io::split(stream);
        let request = request_from_reader_with_capacity(&mut reader, read_buffer_size).await?;
        info!("{}", request.request_line);

        let writer = Writer::new(Box::new(sink) as ResponseSink);
        handler(writer, request).await
    }
}
