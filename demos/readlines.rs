//! Prints every line of a file, read 8 bytes at a time.
//!
//! Usage: cargo run --example readlines [messages.txt]

use http_from_tcp::lines::lines_channel;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "messages.txt".to_string());
    let file = tokio::fs::File::open(&path).await?;

    let mut lines = lines_channel(file);
    while let Some(line) = lines.recv().await {
        println!("read: {line}");
    }

    Ok(())
}
