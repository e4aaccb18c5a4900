// src/host.rs
//! Reverse DNS naming for the metric namespace.

use eyre::{Result, WrapErr, eyre};
use std::net::IpAddr;

/// Function to turn the target host into a graphite-safe node name.
///
/// The host is resolved to an address, reverse-resolved to its canonical
/// hostname, and the dots are replaced with underscores so the name forms
/// a single metric path segment.
pub fn metric_hostname(host: &str) -> Result<String> {
    let addr: IpAddr = match host.parse() {
        Ok(addr) => addr,
        Err(_) => dns_lookup::lookup_host(host)
            .wrap_err_with(|| format!("failed to resolve {host}"))?
            .into_iter()
            .next()
            .ok_or_else(|| eyre!("no addresses found for {host}"))?,
    };

    let name = dns_lookup::lookup_addr(&addr)
        .wrap_err_with(|| format!("reverse lookup failed for {addr}"))?;

    Ok(name.replace('.', "_"))
}
