use veranda::http::response::{Response, StatusCode};
use veranda::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Found.as_u16(), 302);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Found.reason_phrase(), "Found");
}

#[test]
fn test_response_ok_appends_charset() {
    let resp = Response::ok("text/html", b"hi".to_vec());

    assert_eq!(resp.status, StatusCode::Ok);
    assert_eq!(resp.content_type.as_deref(), Some("text/html;charset=utf-8"));
    assert_eq!(resp.body, b"hi".to_vec());
    assert!(resp.location.is_none());
    assert!(resp.set_cookie.is_none());
}

#[test]
fn test_response_redirect_has_no_body() {
    let resp = Response::redirect("/index.html");

    assert_eq!(resp.status, StatusCode::Found);
    assert_eq!(resp.location.as_deref(), Some("/index.html"));
    assert!(resp.body.is_empty());
    assert!(resp.content_type.is_none());
}

#[test]
fn test_response_with_cookie() {
    let resp = Response::redirect("/index.html").with_cookie("logined=true");

    assert_eq!(resp.set_cookie.as_deref(), Some("logined=true"));
}

#[test]
fn test_serialize_ok_response_framing() {
    let resp = Response::ok("text/html", b"hello world".to_vec());
    let bytes = serialize_response(&resp);

    let expected = b"HTTP/1.1 200 OK\r\n\
        Content-Type: text/html;charset=utf-8\r\n\
        Content-Length: 11\r\n\
        \r\n\
        hello world";
    assert_eq!(bytes, expected.to_vec());
}

#[test]
fn test_serialize_css_response_content_type() {
    let resp = Response::ok("text/css", b"body{}".to_vec());
    let text = String::from_utf8(serialize_response(&resp)).unwrap();

    assert!(text.contains("Content-Type: text/css;charset=utf-8\r\n"));
    assert!(text.contains("Content-Length: 6\r\n"));
}

#[test]
fn test_serialize_redirect_framing() {
    let resp = Response::redirect("/index.html");
    let bytes = serialize_response(&resp);

    let expected = b"HTTP/1.1 302 Found\r\n\
        Location: /index.html\r\n\
        \r\n";
    assert_eq!(bytes, expected.to_vec());
}

#[test]
fn test_serialize_redirect_with_cookie_framing() {
    let resp = Response::redirect("/index.html").with_cookie("logined=true");
    let bytes = serialize_response(&resp);

    let expected = b"HTTP/1.1 302 Found\r\n\
        Location: /index.html\r\n\
        Set-Cookie: logined=true; Path=/\r\n\
        \r\n";
    assert_eq!(bytes, expected.to_vec());
}

#[test]
fn test_serialize_empty_ok_body() {
    let resp = Response::ok("text/html", Vec::new());
    let text = String::from_utf8(serialize_response(&resp)).unwrap();

    assert!(text.ends_with("Content-Length: 0\r\n\r\n"));
}

#[test]
fn test_serialize_content_length_matches_body_bytes() {
    let body = vec![0u8, 1, 2, 3, 4];
    let resp = Response::ok("text/html", body.clone());
    let bytes = serialize_response(&resp);

    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Content-Length: 5\r\n"));
    assert!(bytes.ends_with(&body));
}
