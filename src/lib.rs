//! Veranda - Minimal Web Application Server
//!
//! A single-process HTTP server with a hand-rolled HTTP/1.1 layer: static
//! files from a document root, user signup and login over form POSTs, and a
//! cookie-gated user listing.

pub mod app;
pub mod config;
pub mod http;
pub mod server;
