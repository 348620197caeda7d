//! Raw HTTP/1.1 fixtures for exercising fetch behavior against real sockets.
//!
//! The fixtures speak just enough HTTP to drive reqwest through the cases a
//! router-level mock cannot produce: bodies that end at connection close,
//! declared lengths longer than the bytes sent, and addresses nothing
//! listens on.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

pub(crate) const TWO_EVENT_FEED: &str = concat!(
    "BEGIN:VCALENDAR\r\n",
    "VERSION:2.0\r\n",
    "PRODID:-//officeholidays//fixture//EN\r\n",
    "BEGIN:VEVENT\r\n",
    "SUMMARY:New Year's Day\r\n",
    "DTSTART;VALUE=DATE:20230101\r\n",
    "END:VEVENT\r\n",
    "BEGIN:VEVENT\r\n",
    "SUMMARY:Independence Day\r\n",
    "DTSTART;VALUE=DATE:20230720\r\n",
    "END:VEVENT\r\n",
    "END:VCALENDAR\r\n",
);

pub(crate) const ONE_EVENT_FEED: &str = concat!(
    "BEGIN:VCALENDAR\r\n",
    "VERSION:2.0\r\n",
    "BEGIN:VEVENT\r\n",
    "SUMMARY:Canada Day\r\n",
    "DTSTART;VALUE=DATE:20230701\r\n",
    "END:VEVENT\r\n",
    "END:VCALENDAR\r\n",
);

pub(crate) fn feed_url(addr: SocketAddr) -> Url {
    Url::parse(&format!("http://{addr}/feed.ics")).expect("fixture address is a valid URL")
}

/// Bind an ephemeral listener and serve `response` to the first connection.
async fn serve_raw(response: Vec<u8>) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let url = feed_url(listener.local_addr().expect("fixture local addr"));

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept fixture connection");
        // Drain the request head before responding.
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket.write_all(&response).await.expect("write fixture response");
        let _ = socket.shutdown().await;
    });

    url
}

/// Serve `body` once as a well-formed response with an accurate length.
pub(crate) async fn serve_once(body: &'static str) -> Url {
    serve_raw(
        format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/calendar\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        )
        .into_bytes(),
    )
    .await
}

/// Like [`serve_once`], but the response is delayed; for checking that the
/// merged channel stays open until slow sources finish.
pub(crate) async fn serve_once_delayed(body: &'static str, delay: std::time::Duration) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture listener");
    let url = feed_url(listener.local_addr().expect("fixture local addr"));

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept fixture connection");
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        tokio::time::sleep(delay).await;
        let response = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/calendar\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write fixture response");
        let _ = socket.shutdown().await;
    });

    url
}

/// Serve a bodyless response with the given status line, e.g. `404 Not Found`.
pub(crate) async fn serve_status(status: &'static str) -> Url {
    serve_raw(format!("HTTP/1.1 {status}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n").into_bytes())
        .await
}

/// Serve `body` with no declared length; it ends when the connection closes,
/// which the client sees as a clean end of stream.
pub(crate) async fn serve_until_close(body: &'static str) -> Url {
    serve_raw(format!("HTTP/1.1 200 OK\r\nconnection: close\r\n\r\n{body}").into_bytes()).await
}

/// Serve `body` under a declared length 100 bytes longer than what is sent,
/// so the client hits a read error mid-body.
pub(crate) async fn serve_short_body(body: &'static str) -> Url {
    serve_raw(
        format!(
            "HTTP/1.1 200 OK\r\ncontent-length: {}\r\n\r\n{body}",
            body.len() + 100
        )
        .into_bytes(),
    )
    .await
}

/// An address with nothing listening on it.
pub(crate) async fn refused_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway local addr");
    drop(listener);
    feed_url(addr)
}
