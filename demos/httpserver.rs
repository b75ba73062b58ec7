//! An HTTP server built on http-from-tcp.
//!
//! Routes:
//!   GET /yourproblem  -> 400 HTML page
//!   GET /myproblem    -> 500 HTML page
//!   GET /video        -> assets/vim.mp4
//!   GET /stream/<n>   -> <n> lines as a chunked body with length and SHA-256 trailers
//!   anything else     -> 200 HTML page
//!
//! Usage: cargo run --example httpserver [config.json]

use log::{error, info};
use sha2::{Digest, Sha256};

use http_from_tcp::{
    default_headers, Headers, Request, ResponseWriter, Server, ServerConfig, ServerError,
    StatusCode,
};

const CHUNK_SIZE: usize = 1024;

fn html_page(status: StatusCode) -> String {
    let (description, explanation) = match status {
        StatusCode::BadRequest => ("Bad Request", "Your request honestly kinda sucked."),
        StatusCode::InternalServerError => {
            ("Internal Server Error", "Okay, you know what? This one is on me.")
        }
        StatusCode::Ok => ("Success!", "Your request was an absolute banger."),
    };
    format!(
        "<html>\n  <head>\n    <title>{status}</title>\n  </head>\n  <body>\n    <h1>{description}</h1>\n    <p>{explanation}</p>\n  </body>\n</html>\n"
    )
}

async fn serve_page(mut w: ResponseWriter, status: StatusCode) -> Result<(), ServerError> {
    let body = html_page(status);
    let mut headers = default_headers(body.len());
    headers.set_exclusive("Content-Type", "text/html");

    w.write_status_line(status).await?;
    w.write_headers(&headers).await?;
    let n = w.write_body(body.as_bytes()).await?;
    if n != body.len() {
        return Err(ServerError::InternalError(format!("short write: {n} of {}", body.len())));
    }
    Ok(())
}

async fn serve_video(mut w: ResponseWriter) -> Result<(), ServerError> {
    let video = match tokio::fs::read("assets/vim.mp4").await {
        Ok(video) => video,
        Err(e) => {
            error!("Error reading video: {e}");
            return serve_page(w, StatusCode::InternalServerError).await;
        }
    };

    let mut headers = default_headers(video.len());
    headers.set_exclusive("Content-Type", "video/mp4");

    w.write_status_line(StatusCode::Ok).await?;
    w.write_headers(&headers).await?;
    w.write_body(&video).await?;
    Ok(())
}

async fn serve_stream(mut w: ResponseWriter, count: usize) -> Result<(), ServerError> {
    let mut headers: Headers = default_headers(0);
    headers.remove("Content-Length");
    headers.set_exclusive("Transfer-Encoding", "chunked");
    headers.set_exclusive("Trailer", "X-Content-SHA256, X-Content-Length");

    w.write_status_line(StatusCode::Ok).await?;
    w.write_headers(&headers).await?;

    let body: String = (0..count).map(|i| format!("line {i}\n")).collect();
    for chunk in body.as_bytes().chunks(CHUNK_SIZE) {
        w.write_chunked_body(chunk).await?;
    }

    headers.set_exclusive("X-Content-Length", body.len().to_string());
    headers.set_exclusive("X-Content-SHA256", format!("{:x}", Sha256::digest(body.as_bytes())));
    w.write_chunked_body_done(&headers).await?;
    Ok(())
}

async fn handler(w: ResponseWriter, req: Request) -> Result<(), ServerError> {
    let target = req.request_line.target.as_str();
    if let Some(count) = target.strip_prefix("/stream/") {
        return match count.parse() {
            Ok(count) => serve_stream(w, count).await,
            Err(_) => serve_page(w, StatusCode::BadRequest).await,
        };
    }

    match target {
        "/yourproblem" => serve_page(w, StatusCode::BadRequest).await,
        "/myproblem" => serve_page(w, StatusCode::InternalServerError).await,
        "/video" => serve_video(w).await,
        _ => serve_page(w, StatusCode::Ok).await,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_json_file(path)?,
        None => ServerConfig::default(),
    };

    let server = Server::serve(config, handler).await?;
    info!("Server started on {}", server.local_addr());

    tokio::signal::ctrl_c().await?;
    server.shutdown().await?;
    info!("Server gracefully stopped");

    Ok(())
}
