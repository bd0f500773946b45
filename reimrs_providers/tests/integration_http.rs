//! Integration tests for `HttpFetcher` against a local HTTP server.
//!
//! These tests verify that:
//! - The request path is `/<normalized-word>.html`
//! - A 2xx page body is returned as-is
//! - Non-2xx responses, undecodable bodies, refused connections and
//!   timeouts all collapse to `Page::Unavailable` and therefore to an
//!   empty rhyme set

use reimrs_config::LookupConfig;
use reimrs_core::{Limit, Page, PageFetcher, Rhymes};
use reimrs_providers::HttpFetcher;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const PAGE: &str = r#"<ul><li><a data-rhyme="Maus">Maus</a></li><li><a data-rhyme="Laus">Laus</a></li></ul>"#;

/// Serve exactly one canned response and hand back the request line.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve_bytes_once(status, body.as_bytes()).await
}

async fn serve_bytes_once(
    status: &'static str,
    body: &'static [u8],
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.write_all(body).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string()
    });

    (base_url, handle)
}

fn fetcher_for(base_url: String) -> HttpFetcher {
    HttpFetcher::new(&LookupConfig {
        base_url,
        timeout_secs: Some(5),
    })
    .unwrap()
}

#[tokio::test]
async fn test_fetch_returns_page_body() {
    let (base_url, server) = serve_once("200 OK", PAGE).await;
    let fetcher = fetcher_for(base_url);

    let page = fetcher.fetch("maus").await;

    assert_eq!(page, Page::Available(PAGE.to_string()));
    assert_eq!(server.await.unwrap(), "GET /maus.html HTTP/1.1");
}

#[tokio::test]
async fn test_lookup_normalizes_word_in_request_path() {
    let (base_url, server) = serve_once("200 OK", PAGE).await;
    let fetcher = fetcher_for(base_url);

    let rhymes = Rhymes::lookup(&fetcher, "Fuß", None).await;

    assert_eq!(server.await.unwrap(), "GET /fuss.html HTTP/1.1");
    assert_eq!(rhymes.word(), "Fuß");
    assert_eq!(rhymes.as_slice(), ["Maus", "Laus"]);
}

#[tokio::test]
async fn test_lookup_with_limit() {
    let (base_url, _server) = serve_once("200 OK", PAGE).await;
    let fetcher = fetcher_for(base_url);

    let rhymes = Rhymes::lookup(&fetcher, "Haus", Some(Limit::new(1))).await;

    assert_eq!(rhymes.as_slice(), ["Maus"]);
}

#[tokio::test]
async fn test_http_error_status_is_unavailable() {
    let (base_url, _server) = serve_once("404 Not Found", PAGE).await;
    let fetcher = fetcher_for(base_url);

    let page = fetcher.fetch("gibtsnicht").await;

    assert_eq!(page, Page::Unavailable);
}

#[tokio::test]
async fn test_invalid_utf8_body_is_unavailable() {
    let (base_url, _server) = serve_bytes_once("200 OK", b"<a data-rhyme=\"Maus\"></a>\xff").await;
    let fetcher = fetcher_for(base_url);

    assert_eq!(fetcher.fetch("maus").await, Page::Unavailable);

    let (base_url, _server) = serve_bytes_once("200 OK", b"<a data-rhyme=\"Maus\"></a>\xff").await;
    let rhymes = Rhymes::lookup(&fetcher_for(base_url), "Maus", None).await;
    assert!(rhymes.is_empty());
}

#[tokio::test]
async fn test_refused_connection_yields_empty_rhymes() {
    // Bind and drop to get a local port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = fetcher_for(format!("http://{addr}/"));
    let rhymes = Rhymes::lookup(&fetcher, "Haus", None).await;

    assert!(rhymes.is_empty());
}

#[tokio::test]
async fn test_timeout_yields_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    let _server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        drop(socket);
    });

    let fetcher = HttpFetcher::new(&LookupConfig {
        base_url,
        timeout_secs: Some(1),
    })
    .unwrap();

    assert_eq!(fetcher.fetch("haus").await, Page::Unavailable);
}
