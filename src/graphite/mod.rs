// src/graphite/mod.rs

pub mod flatten;
pub mod sender;

pub use flatten::{get_timestamp, to_graphite};

pub use sender::send_to_graphite;
