use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes a response into wire bytes.
///
/// Header order is fixed (Content-Type, Content-Length, Location,
/// Set-Cookie) so the framing is byte-deterministic. Content-Length is
/// derived from the body and emitted only on 200 responses; redirects carry
/// neither a body nor length headers.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    if let Some(content_type) = &resp.content_type {
        buf.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
    }

    if resp.status == StatusCode::Ok {
        buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.body.len()).as_bytes());
    }

    if let Some(location) = &resp.location {
        buf.extend_from_slice(format!("Location: {location}\r\n").as_bytes());
    }

    if let Some(cookie) = &resp.set_cookie {
        buf.extend_from_slice(format!("Set-Cookie: {cookie}; Path=/\r\n").as_bytes());
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
        }
    }

    /// Writes the full response and flushes. One write per response; a
    /// failure here is fatal for the connection and is not retried.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> anyhow::Result<()> {
        stream.write_all(&self.buffer).await?;
        stream.flush().await?;

        Ok(())
    }
}
