use bytes::{Buf, BytesMut};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::app::Router;
use crate::http::parser::{ParseError, parse_http_request};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Upper bound on one buffered request, head and body together.
const MAX_REQUEST_BYTES: usize = 64 * 1024;

pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    state: ConnectionState,
    router: Router,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(ResponseWriter),
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, router: Router) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            state: ConnectionState::Reading,
            router,
        }
    }

    /// Handles the connection: read one request, dispatch it, write the
    /// response, close. Exactly one pass; any error aborts the remaining
    /// stages and the socket closes on the way out.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(request) => {
                            tracing::debug!(
                                method = %request.method.as_str(),
                                path = %request.path,
                                "Request received"
                            );
                            self.state = ConnectionState::Dispatching(request);
                        }
                        None => {
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Dispatching(request) => {
                    let response = self.router.dispatch(request).await?;

                    let writer = ResponseWriter::new(&response);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    // No keep-alive: one response, then close.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Accumulates bytes until the buffer parses as a full request.
    ///
    /// Returns `None` when the client closes without sending anything. A
    /// close in the middle of a request, a request over the size cap, and
    /// any structural parse error are all fatal for the connection.
    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            // Try parsing whatever we already have
            match parse_http_request(&self.buffer) {
                Ok((request, consumed)) => {
                    self.buffer.advance(consumed);
                    return Ok(Some(request));
                }

                Err(ParseError::Incomplete) => {
                    // Need more data → fall through to read
                }

                Err(e) => {
                    return Err(anyhow::anyhow!("HTTP parse error: {}", e));
                }
            }

            if self.buffer.len() > MAX_REQUEST_BYTES {
                anyhow::bail!("request exceeds {} bytes", MAX_REQUEST_BYTES);
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    // Client closed without sending a request
                    return Ok(None);
                }
                anyhow::bail!("connection closed mid-request");
            }
        }
    }
}
