//! Calendar aggregation handlers: the live streaming path and the sorted
//! batch path.

use std::convert::Infallible;

use anyhow::Context;
use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use tokio::sync::mpsc;

use icsmux_core::combine::{combine_calendars, parse_calendar, Calendar};

use crate::{fetch::aggregate_feeds, state::AppState};

use super::AppError;

/// GET /calendar.ics - merged live stream of every configured feed.
///
/// Spawns the fan-in aggregation and streams as units arrive: the static
/// header first, then event units in arrival order, then the footer once
/// every source has finished. Interleaving across sources is
/// nondeterministic; only the batch path sorts. Sentinel error lines for
/// failed sources appear inline in the body; the response status is already
/// committed by the time they can occur.
pub async fn stream_calendar(State(state): State<AppState>) -> Response {
    let (tx, mut rx) = mpsc::channel(state.config.channel_capacity);

    tokio::spawn(aggregate_feeds(
        state.client.clone(),
        state.config.sources.clone(),
        tx,
    ));

    let mut shutdown_rx = state.subscribe_shutdown();
    let header = state.config.stream_header.clone();
    let footer = state.config.stream_footer.clone();

    let stream = async_stream::stream! {
        yield Ok::<String, Infallible>(header);

        loop {
            tokio::select! {
                unit = rx.recv() => match unit {
                    Some(unit) => yield Ok(unit),
                    // Channel closed: every fetcher has finished.
                    None => break,
                },
                _ = shutdown_rx.recv() => {
                    // Dropping the receiver makes the remaining producers'
                    // sends fail, which winds the fetchers down.
                    tracing::info!("Shutdown signaled, closing calendar stream");
                    break;
                }
            }
        }

        yield Ok(footer);
    };

    (
        [(header::CONTENT_TYPE, "text/calendar")],
        Body::from_stream(stream),
    )
        .into_response()
}

/// GET /calendar/combined.ics - batch aggregation: fetch every source fully,
/// parse, merge, sort by the raw DTSTART value, serialize.
///
/// Unlike the streaming path this is all-or-nothing: any fetch or parse
/// failure fails the whole request.
pub async fn combined_calendar(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut combined: Option<Calendar> = None;

    for url in &state.config.sources {
        let body = state
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let calendar =
            parse_calendar(&body).with_context(|| format!("parsing feed {url}"))?;

        combined = Some(match combined {
            Some(merged) => combine_calendars(&merged, &calendar),
            None => calendar,
        });
    }

    let body = combined
        .map(|calendar| calendar.to_string())
        .unwrap_or_else(|| Calendar::new().to_string());

    Ok(([(header::CONTENT_TYPE, "text/calendar")], body).into_response())
}
