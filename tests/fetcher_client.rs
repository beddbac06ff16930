use newsbrief::fetcher::{Charset, FetchError, fetch};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_fetch_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/test"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(
                    "<html><head><title>Test</title></head><body>Hello World</body></html>"
                        .as_bytes(),
                )
                .insert_header("Content-Type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/test", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.status.is_success());
    assert!(result.body_utf8.contains("Hello World"));
    assert_eq!(result.charset, Charset::Utf8);
    assert_eq!(result.url_final.as_str(), url);
}

#[tokio::test]
async fn test_fetch_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notfound"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/notfound", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(FetchError::Http { status }) => assert_eq!(status.as_u16(), 404),
        _ => panic!("Expected HTTP 404 error"),
    }
}

#[tokio::test]
async fn test_fetch_500_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/error", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(FetchError::Http { status }) => assert_eq!(status.as_u16(), 500),
        _ => panic!("Expected HTTP 500 error"),
    }
}

#[tokio::test]
async fn test_fetch_redirect() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/redirect"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/final"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/final"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes("<html><body>Final page</body></html>".as_bytes())
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/redirect", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.status.is_success());
    assert!(result.body_utf8.contains("Final page"));
    assert!(result.url_final.as_str().ends_with("/final"));
}

#[tokio::test]
async fn test_fetch_gzip_compression() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let original_content =
        "<html><head><title>Compressed</title></head><body>This content is gzipped!</body></html>";

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(original_content.as_bytes()).unwrap();
    let compressed_data = encoder.finish().unwrap();

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gzipped"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(compressed_data)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .insert_header("Content-Encoding", "gzip"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/gzipped", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.status.is_success());
    assert!(result.body_utf8.contains("This content is gzipped!"));
}

#[tokio::test]
async fn test_fetch_decodes_declared_charset() {
    let mock_server = MockServer::start().await;

    // "Café" encoded as windows-1252
    let body = b"<html><body><p>Caf\xe9 society</p></body></html>".to_vec();

    Mock::given(method("GET"))
        .and(path("/latin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body)
                .insert_header("Content-Type", "text/html; charset=windows-1252"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/latin", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert_eq!(result.charset, Charset::Windows1252);
    assert!(result.body_utf8.contains("Café society"));
}

#[tokio::test]
async fn test_fetch_without_content_type_still_parses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bare"))
        .respond_with(
            ResponseTemplate::new(200).set_body_bytes("<p>No header here</p>".as_bytes()),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/bare", mock_server.uri());
    let result = fetch(&url).await.unwrap();

    assert!(result.body_utf8.contains("No header here"));
}

#[tokio::test]
async fn test_fetch_body_too_large() {
    let mock_server = MockServer::start().await;
    let large_body = vec![b'a'; 6 * 1024 * 1024];

    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(large_body)
                .insert_header("Content-Type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/large", mock_server.uri());
    let result = fetch(&url).await;

    match result {
        Err(FetchError::BodyTooLarge(size)) => assert_eq!(size, 6 * 1024 * 1024),
        _ => panic!("Expected BodyTooLarge error"),
    }
}

#[tokio::test]
async fn test_fetch_invalid_url() {
    let result = fetch("not-a-valid-url").await;

    match result {
        Err(FetchError::InvalidUrl(_)) => {}
        _ => panic!("Expected InvalidUrl error"),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    // Grab a free port, then close the listener so nothing is serving it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = fetch(&format!("http://{addr}/gone")).await;

    assert!(matches!(result, Err(FetchError::Dns(_))), "got {result:?}");
}
