/// Marker line opening a VEVENT block.
pub const BEGIN_EVENT: &str = "BEGIN:VEVENT";
/// Marker line closing a VEVENT block.
pub const END_EVENT: &str = "END:VEVENT";

/// Returns true when `line` is exactly `marker` terminated by `\r\n` or bare
/// `\n`. An unterminated fragment never matches: marker detection works on
/// whole lines only.
fn is_marker_line(line: &str, marker: &str) -> bool {
    match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest) == marker,
        None => false,
    }
}

/// Accumulates scanned lines into discrete VEVENT text blocks.
///
/// The extractor is a two-state machine. While idle it discards everything
/// except a begin-marker line; once inside an event it appends every line to
/// the current block and emits the block when the end-marker arrives. Feeds
/// with either line-ending convention are handled identically; getting this
/// wrong silently drops every block of a CRLF feed.
///
/// The accumulated text is opaque: properties inside the block are never
/// interpreted here.
#[derive(Debug, Default)]
pub struct EventExtractor {
    buf: String,
    in_event: bool,
}

impl EventExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the state machine by one line, returning a completed event
    /// block if this line closed one.
    ///
    /// A begin-marker while a block is already open restarts the
    /// accumulation: feeds in the wild occasionally omit `END:VEVENT`, and
    /// carrying the broken block into the next one would corrupt both.
    pub fn feed_line(&mut self, line: &str) -> Option<String> {
        if is_marker_line(line, BEGIN_EVENT) {
            self.in_event = true;
            self.buf.clear();
            self.buf.push_str(line);
            return None;
        }

        if !self.in_event {
            return None;
        }

        self.buf.push_str(line);
        if is_marker_line(line, END_EVENT) {
            self.in_event = false;
            return Some(std::mem::take(&mut self.buf));
        }
        None
    }

    /// Consume the extractor, flushing a trailing unterminated block.
    ///
    /// A feed truncated mid-event still has useful content; it is emitted as
    /// one best-effort partial block rather than dropped.
    pub fn finish(self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(self.buf)
        }
    }
}
