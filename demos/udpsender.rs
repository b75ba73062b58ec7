//! Sends each line typed on stdin as a UDP datagram.
//!
//! Watch the datagrams with: nc -u -l 42069

use log::error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UdpSocket;

const ADDR: &str = "127.0.0.1:42069";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let socket = UdpSocket::bind("127.0.0.1:0").await?;
    socket.connect(ADDR).await?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        line.clear();
        match stdin.read_line(&mut line).await {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(e) => {
                error!("Input error: {e}");
                return Err(e);
            }
        }

        if let Err(e) = socket.send(line.as_bytes()).await {
            error!("Write error: {e}");
        }
    }
}
