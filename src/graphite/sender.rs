// src/graphite/sender.rs
//! TCP push of metric lines to the graphite plaintext port.

use eyre::{Result, WrapErr};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Function to send metric lines to graphite over one TCP connection.
///
/// Every line is written newline-terminated, in sequence. The connection
/// is reclaimed on drop; there is no shutdown handshake.
pub async fn send_to_graphite(host: &str, port: u16, results: &[String]) -> Result<()> {
    let mut stream = TcpStream::connect((host, port))
        .await
        .wrap_err_with(|| format!("failed to connect to graphite at {host}:{port}"))?;

    for r in results {
        stream
            .write_all(format!("{r}\n").as_bytes())
            .await
            .wrap_err("failed to write metric line to graphite")?;
    }
    stream
        .flush()
        .await
        .wrap_err("failed to flush graphite connection")?;

    Ok(())
}
