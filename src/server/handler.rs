//! Request handlers.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::io::AsyncWrite;

use crate::request::Request;
use crate::response::Writer;
use crate::server::error::Error;

/// The sink a handler writes its response to.
pub type ResponseSink = Box<dyn AsyncWrite + Send + Unpin>;

/// A response writer over a connection.
pub type ResponseWriter = Writer<ResponseSink>;

/// Type alias for a boxed future that returns a Result<(), Error>.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), Error>> + Send>>;

/// Type alias for a handler function that takes the response writer and the parsed request.
pub type HandlerFn = Arc<dyn Fn(ResponseWriter, Request) -> HandlerFuture + Send + Sync>;

/// Box a handler closure into a [`HandlerFn`].
pub fn handler_fn<F, Fut>(handler: F) -> HandlerFn
where
    F: Fn(ResponseWriter, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), Error>> + Send + 'static,
{
    Arc::new(move |w: ResponseWriter, req: Request| -> HandlerFuture { Box::pin(handler(w, req)) })
}
