use std::collections::HashMap;
use veranda::http::request::{Method, Request, RequestBuilder};

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_lookup_is_exact_case() {
    let mut headers = HashMap::new();
    headers.insert("Content-Length".to_string(), "42".to_string());

    let req = Request {
        method: Method::POST,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        body: vec![],
    };

    assert_eq!(req.header("Content-Length"), Some("42"));
    assert_eq!(req.header("content-length"), None);
}

#[test]
fn test_request_cookies_parsed_from_header() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/user/list")
        .header("Cookie", "logined=true; JSESSIONID=abc")
        .build()
        .unwrap();

    let cookies = req.cookies();
    assert_eq!(cookies.get("logined").unwrap(), "true");
    assert_eq!(cookies.get("JSESSIONID").unwrap(), "abc");
}

#[test]
fn test_request_cookies_missing_header() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert!(req.cookies().is_empty());
}

#[test]
fn test_request_form_params_decodes_body() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/user/create")
        .body(b"userId=abc&password=123".to_vec())
        .build()
        .unwrap();

    let params = req.form_params();
    assert_eq!(params.get("userId").unwrap(), "abc");
    assert_eq!(params.get("password").unwrap(), "123");
}

#[test]
fn test_request_form_params_empty_body() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert!(req.form_params().is_empty());
}

#[test]
fn test_method_from_token_case_insensitive() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("get"), Method::GET);
    assert_eq!(Method::from_token("post"), Method::POST);
    assert_eq!(Method::from_token("PoSt"), Method::POST);
}

#[test]
fn test_method_from_token_unknown_is_preserved() {
    assert_eq!(
        Method::from_token("FETCH"),
        Method::Other("FETCH".to_string())
    );
    assert_eq!(Method::from_token("FETCH").as_str(), "FETCH");
}

#[test]
fn test_method_is_post() {
    assert!(Method::from_token("post").is_post());
    assert!(Method::POST.is_post());
    assert!(!Method::GET.is_post());
    assert!(!Method::Other("POSTING".to_string()).is_post());
}

#[test]
fn test_method_as_str() {
    assert_eq!(Method::GET.as_str(), "GET");
    assert_eq!(Method::DELETE.as_str(), "DELETE");
}

#[test]
fn test_builder_defaults_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_builder_stores_custom_version() {
    let req = RequestBuilder::new()
        .method(Method::GET)
        .path("/")
        .version("HTTP/1.0")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.0");
}

#[test]
fn test_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_with_body() {
    let body_content = b"test body content".to_vec();
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/user/create")
        .body(body_content.clone())
        .build()
        .unwrap();

    assert_eq!(req.body, body_content);
}
