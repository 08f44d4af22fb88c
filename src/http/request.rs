use crate::http::codec;
use std::collections::HashMap;

/// HTTP request methods.
///
/// The dispatcher only distinguishes POST from everything else, but the
/// common verbs are kept as named variants for logging and matching.
/// Unrecognized verbs are preserved verbatim in [`Method::Other`] rather
/// than rejected; they are routed the same way GET is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// Any other verb, stored as received
    Other(String),
}

impl Method {
    /// Parses an HTTP method token, case-insensitively.
    ///
    /// POST detection must work for `post`, `POST` and any mixed casing, so
    /// the token is matched after ASCII-uppercasing. Unknown verbs are kept
    /// as [`Method::Other`] with their original spelling.
    ///
    /// # Example
    ///
    /// ```
    /// # use veranda::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("post"), Method::POST);
    /// assert_eq!(Method::from_token("FETCH"), Method::Other("FETCH".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Other(token.to_string()),
        }
    }

    /// True when this is a POST request, however the client spelled it.
    pub fn is_post(&self) -> bool {
        matches!(self, Method::POST)
    }

    /// The method name for logging.
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Other(token) => token,
        }
    }
}

/// Represents a parsed HTTP request from a client.
///
/// The path is stored raw: no query-string splitting is performed on it.
/// The body is non-empty only for POST requests that declared a
/// `Content-Length`; decoding it into form fields is deferred to
/// [`Request::form_params`].
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path (e.g., "/index.html"), raw
    pub path: String,
    /// HTTP version token (typically "HTTP/1.1"), stored but unused
    pub version: String,
    /// Request headers as key-value pairs, values trimmed
    pub headers: HashMap<String, String>,
    /// Request body for POST requests
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by exact name.
    ///
    /// Lookups are case-sensitive (`Content-Length`, `Cookie`), matching
    /// how the headers were stored at parse time.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Parses the `Cookie` header into a name/value map.
    ///
    /// A missing header yields an empty map.
    pub fn cookies(&self) -> HashMap<String, String> {
        codec::parse_cookies(self.header("Cookie").unwrap_or(""))
    }

    /// Decodes the body as a `field=value&field2=value2` form into a map.
    ///
    /// An empty body yields an empty map. Malformed tokens are dropped by
    /// the codec; no percent-decoding is applied.
    pub fn form_params(&self) -> HashMap<String, String> {
        codec::parse_query_string(&String::from_utf8_lossy(&self.body))
    }
}

/// Builder for constructing Request objects, mainly for tests.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            body: self.body,
        })
    }
}
