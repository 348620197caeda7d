//! Streaming feed pipeline: chunk-to-line reassembly and VEVENT extraction.
//!
//! A fetch loop pushes raw network chunks into a [`LineScanner`], feeds the
//! scanned lines through an [`EventExtractor`], and forwards every completed
//! event block downstream. Neither type performs I/O, so the whole pipeline
//! is testable without a socket in sight.

mod extract;
mod scan;

pub use extract::{EventExtractor, BEGIN_EVENT, END_EVENT};
pub use scan::LineScanner;
