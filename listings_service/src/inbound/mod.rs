//! Inbound adapters - HTTP handlers and other entry points

pub mod http;
