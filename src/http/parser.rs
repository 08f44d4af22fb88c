use crate::http::codec;
use crate::http::request::{Method, Request};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed request line")]
    InvalidRequestLine,
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
    #[error("POST request without Content-Length")]
    MissingContentLength,
    #[error("invalid Content-Length value")]
    InvalidContentLength,
    #[error("incomplete request")]
    Incomplete,
}

/// Parses one HTTP request out of a byte buffer.
///
/// Returns the request plus the number of bytes consumed, or
/// [`ParseError::Incomplete`] when the buffer does not yet hold a full
/// request. All other errors are structural and fatal for the connection.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for the head/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let head = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = head.split("\r\n");

    // Request line: the first three space-separated tokens, all non-empty.
    // Anything after the third token is ignored.
    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut tokens = request_line.split(' ');

    let method_token = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let path = tokens.next().ok_or(ParseError::InvalidRequestLine)?;
    let version = tokens.next().ok_or(ParseError::InvalidRequestLine)?;

    if method_token.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::InvalidRequestLine);
    }

    let method = Method::from_token(method_token);

    // Header lines. Malformed lines are dropped, not fatal; on duplicate
    // names the last value wins.
    let mut headers = HashMap::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        if let Some((key, value)) = codec::parse_header(line) {
            headers.insert(key, value);
        }
    }

    // Body: only POST requests carry one, and then Content-Length is
    // mandatory. Other methods leave trailing bytes unconsumed.
    let (body, consumed) = if method.is_post() {
        let declared = headers
            .get("Content-Length")
            .ok_or(ParseError::MissingContentLength)?;
        let content_length: usize = declared
            .parse()
            .map_err(|_| ParseError::InvalidContentLength)?;

        if body_bytes.len() < content_length {
            return Err(ParseError::Incomplete);
        }

        (
            body_bytes[..content_length].to_vec(),
            headers_end + 4 + content_length,
        )
    } else {
        (Vec::new(), headers_end + 4)
    };

    let request = Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body,
    };

    Ok((request, consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
