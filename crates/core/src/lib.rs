//! Core pipeline for aggregating remote iCalendar feeds.
//!
//! This crate holds the I/O-free pieces of icsmux: the line scanner and
//! VEVENT extractor driven by the streaming path, and the parse/combine
//! helpers used by the batch path. All networking and HTTP serving lives in
//! the `icsmux` server crate.

pub mod combine;
pub mod feed;
