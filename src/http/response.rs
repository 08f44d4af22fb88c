/// HTTP status codes emitted by the server.
///
/// The application only ever answers with two statuses:
/// - `Ok` (200): static file or user listing served successfully
/// - `Found` (302): redirect after form handling or a failed cookie gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found
    Found,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use veranda::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Found.as_u16(), 302);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// The header set is fixed by design: content type and content length for
/// 200 responses, location and an optional cookie for 302 redirects.
/// Content length is derived from the body when the response is framed.
/// A response is constructed, written once, and discarded.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// `Content-Type` value, set on 200 responses
    pub content_type: Option<String>,
    /// `Location` value, set on 302 responses
    pub location: Option<String>,
    /// `Set-Cookie` value, without the trailing `; Path=/`
    pub set_cookie: Option<String>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a 200 OK response carrying `body`.
    ///
    /// `;charset=utf-8` is appended to the given content type, as on every
    /// successful response this server sends.
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: StatusCode::Ok,
            content_type: Some(format!("{content_type};charset=utf-8")),
            location: None,
            set_cookie: None,
            body,
        }
    }

    /// Creates a 302 redirect to `location` with an empty body.
    pub fn redirect(location: impl Into<String>) -> Self {
        Self {
            status: StatusCode::Found,
            content_type: None,
            location: Some(location.into()),
            set_cookie: None,
            body: Vec::new(),
        }
    }

    /// Attaches a `Set-Cookie` header value to the response.
    ///
    /// The writer appends `; Path=/` when framing, so callers pass only the
    /// `name=value` part.
    ///
    /// # Example
    ///
    /// ```
    /// # use veranda::http::response::Response;
    /// let resp = Response::redirect("/index.html").with_cookie("logined=true");
    /// assert_eq!(resp.set_cookie.as_deref(), Some("logined=true"));
    /// ```
    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.set_cookie = Some(cookie.into());
        self
    }
}
