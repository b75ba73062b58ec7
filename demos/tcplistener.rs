//! Accepts TCP connections and prints the HTTP request read from each one.
//!
//! Try it with: curl -X POST -d 'hello' http://127.0.0.1:42069/coffee

use log::{error, info};
use tokio::net::TcpListener;

use http_from_tcp::request_from_reader;

const ADDR: &str = "127.0.0.1:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let listener = TcpListener::bind(ADDR).await?;
    println!("Listening for TCP traffic on {ADDR}");

    loop {
        let (mut socket, addr) = listener.accept().await?;
        info!("Connection accepted: {addr}");

        match request_from_reader(&mut socket).await {
            Ok(request) => {
                println!("Request line:");
                println!("- Method: {}", request.request_line.method);
                println!("- Target: {}", request.request_line.target);
                println!("- Version: {}", request.request_line.version);
                println!("Headers:");
                for (name, value) in request.headers.iter() {
                    println!("- {name}: {value}");
                }
                println!("Body:");
                println!("{}", String::from_utf8_lossy(&request.body));
            }
            Err(e) => error!("Error reading request from {addr}: {e}"),
        }

        info!("Connection to {addr} closed");
    }
}
