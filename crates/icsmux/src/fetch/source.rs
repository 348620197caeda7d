use futures_util::StreamExt;
use tokio::sync::mpsc;
use url::Url;

use icsmux_core::feed::{EventExtractor, LineScanner};

use super::FetchError;

/// Fetch one source and forward every extracted event unit to `tx`.
///
/// Performs exactly one GET and scans the body incrementally, so the first
/// event can reach the consumer while the rest of the feed is still in
/// flight. Failures never propagate: a connect or read failure becomes a
/// single sentinel unit naming the URL (see [`FetchError`]) and ends this
/// source, leaving sibling fetches untouched. No retries happen here.
///
/// A failed send means the consumer is gone (client disconnect or server
/// shutdown) and silently ends the fetch; that is the cancellation path,
/// not an error.
pub async fn fetch_source(client: &reqwest::Client, url: &Url, tx: &mpsc::Sender<String>) {
    let response = match client
        .get(url.clone())
        .send()
        .await
        .and_then(|response| response.error_for_status())
    {
        Ok(response) => response,
        Err(source) => {
            tracing::warn!(%url, error = %source, "Feed fetch failed");
            let sentinel = FetchError::Connect {
                url: url.clone(),
                source,
            }
            .sentinel();
            let _ = tx.send(sentinel).await;
            return;
        }
    };

    let mut body = response.bytes_stream();
    let mut scanner = LineScanner::new();
    let mut extractor = EventExtractor::new();

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(source) => {
                // The body died mid-stream; any half-accumulated event goes
                // down with it. Only the sentinel is forwarded.
                tracing::warn!(%url, error = %source, "Feed body read failed");
                let sentinel = FetchError::Read {
                    url: url.clone(),
                    source,
                }
                .sentinel();
                let _ = tx.send(sentinel).await;
                return;
            }
        };

        scanner.extend(&chunk);
        while let Some(line) = scanner.next_line() {
            if let Some(unit) = extractor.feed_line(&line) {
                if tx.send(unit).await.is_err() {
                    tracing::debug!(%url, "Consumer dropped, stopping fetch");
                    return;
                }
            }
        }
    }

    // Clean end of stream. An unterminated tail can never equal a marker
    // line, it can only extend a block already in progress.
    if let Some(tail) = scanner.finish() {
        let _ = extractor.feed_line(&tail);
    }
    if let Some(partial) = extractor.finish() {
        tracing::debug!(%url, "Flushing partial trailing event");
        let _ = tx.send(partial).await;
    }
}
