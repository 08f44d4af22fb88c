//! HTTP protocol implementation.
//!
//! A hand-rolled HTTP/1.1 server layer: no library HTTP stack, one request
//! per connection, no keep-alive and no chunked transfer encoding.
//!
//! # Architecture
//!
//! - **`codec`**: the `key=value` pair codec shared by query strings,
//!   cookies and header lines
//! - **`parser`**: parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and lookup helpers
//! - **`response`**: HTTP response representation with the fixed header set
//! - **`writer`**: serializes and writes HTTP responses to the client
//! - **`connection`**: the per-connection state machine
//!
//! # Connection State Machine
//!
//! Each client connection makes exactly one pass:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Accumulate bytes until a full request parses
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Router decides the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close
//! ```
//!
//! A fatal error at any stage (malformed request line, truncated stream,
//! unreadable file, failed write) skips the remaining stages for that
//! connection only; no error response is sent, the socket just closes.

pub mod codec;
pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
