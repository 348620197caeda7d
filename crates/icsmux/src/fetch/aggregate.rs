use tokio::{sync::mpsc, task::JoinSet};
use url::Url;

use super::fetch_source;

/// Fetch every source concurrently, merging all event units onto `tx`.
///
/// Each source gets its own task and its own clone of the sender. The local
/// handle is dropped before joining, so once the join loop has drained every
/// task the last sender is gone and the receiver observes the channel close:
/// exactly once, strictly after all producers have finished. Closing any
/// earlier would drop in-flight units; never closing would hang the consumer.
///
/// Units from different sources interleave in arrival order; no cross-source
/// ordering is promised, and none should be inferred. A panicking worker is
/// logged and does not disturb its siblings.
pub async fn aggregate_feeds(client: reqwest::Client, sources: Vec<Url>, tx: mpsc::Sender<String>) {
    let mut workers = JoinSet::new();

    for url in sources {
        let client = client.clone();
        let tx = tx.clone();
        workers.spawn(async move {
            fetch_source(&client, &url, &tx).await;
        });
    }

    drop(tx);

    while let Some(joined) = workers.join_next().await {
        if let Err(err) = joined {
            tracing::error!(error = %err, "Feed worker panicked");
        }
    }
}
