//! Concurrent source fetching and fan-in aggregation.
//!
//! One task per configured source drives the line scanner and event
//! extractor against that source's response body; completed event units from
//! every task are merged onto a single bounded channel whose closure doubles
//! as the all-sources-done signal. Per-source failures become sentinel text
//! units on the same channel, so one broken feed never silences the others.

mod aggregate;
mod error;
mod source;

#[cfg(test)]
pub(crate) mod testutil;

pub use aggregate::aggregate_feeds;
pub use error::FetchError;
pub use source::fetch_source;
