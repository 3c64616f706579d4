mod common;

use social_links::domain::ports::LinkExtractor;
use social_links::error::AppError;
use social_links::infrastructure::http::{HttpLinkExtractor, build_http_client};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extractor() -> HttpLinkExtractor {
    HttpLinkExtractor::new(build_http_client(None).unwrap())
}

#[tokio::test]
async fn test_extract_keeps_absolute_links_in_order() {
    let page = common::serve_page(
        r#"
        <a href="https://twitter.com/acme">t</a>
        <a href="/about">about</a>
        <a href="http://acme.test/blog">blog</a>
        <a href="https://twitter.com/acme">t again</a>
        <a>no href</a>
        "#,
    )
    .await;

    let links = extractor().extract(&page.uri()).await.unwrap();

    assert_eq!(
        links.as_slice(),
        [
            "https://twitter.com/acme",
            "http://acme.test/blog",
            "https://twitter.com/acme"
        ]
    );
}

#[tokio::test]
async fn test_extract_follows_redirects() {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/home"))
        .mount(&page)
        .await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(common::html_page(r#"<a href="https://github.com/acme">gh</a>"#))
        .mount(&page)
        .await;

    let links = extractor().extract(&page.uri()).await.unwrap();

    assert_eq!(links.as_slice(), ["https://github.com/acme"]);
}

#[tokio::test]
async fn test_extract_non_success_status_is_fetch_error() {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&page)
        .await;

    let err = extractor().extract(&page.uri()).await.unwrap_err();

    assert!(matches!(err, AppError::Fetch(_)));
    assert_eq!(
        err.to_string(),
        "failed to fetch the webpage, status code: 404"
    );
}

#[tokio::test]
async fn test_extract_non_html_is_parse_error() {
    let page = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"a": 1}"#, "application/json"),
        )
        .mount(&page)
        .await;

    let err = extractor().extract(&page.uri()).await.unwrap_err();

    assert!(matches!(err, AppError::Parse(_)));
}

#[tokio::test]
async fn test_extract_unreachable_host_is_fetch_error() {
    // Port 1 (tcpmux) is not served on test hosts, so the connect is refused.
    let err = extractor()
        .extract("http://127.0.0.1:1")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Fetch(_)));
}

#[tokio::test]
async fn test_extract_truncated_body_is_fetch_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Announces 5000 bytes, sends a fragment, then closes the connection.
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\n\
                  Content-Type: text/html\r\n\
                  Content-Length: 5000\r\n\r\n\
                  <html><a href=\"https://x",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let err = extractor()
        .extract(&format!("http://{addr}"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Fetch(_)), "got {}", err.kind());
}
