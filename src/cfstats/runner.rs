// src/cfstats/runner.rs
//! Launches nodetool and exposes its stdout as a line stream.

use eyre::{Result, WrapErr, eyre};
use std::io::BufReader;
use std::process::{Child, ChildStdout, Command, Stdio};

/// Function to launch `nodetool cfstats` against a host.
///
/// Returns a buffered reader over the child's stdout together with the
/// child handle, so the caller can reap the child and check its exit
/// status once the stream is drained.
pub fn spawn_cfstats(host: &str) -> Result<(BufReader<ChildStdout>, Child)> {
    let mut child = Command::new("nodetool")
        .args(["-h", host, "cfstats"])
        .stdout(Stdio::piped())
        .spawn()
        .wrap_err("failed to launch nodetool")?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| eyre!("nodetool stdout was not captured"))?;

    Ok((BufReader::new(stdout), child))
}
