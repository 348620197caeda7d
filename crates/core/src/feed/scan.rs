/// Reassembles logical lines from a stream of byte chunks.
///
/// Network reads split a response body at arbitrary offsets, so a chunk can
/// end in the middle of a line. Chunks are appended with
/// [`extend`](Self::extend), complete lines are drained with
/// [`next_line`](Self::next_line), and whatever is left unterminated when the
/// stream ends comes back from [`finish`](Self::finish).
///
/// Lines keep their original terminator (`\r\n` or bare `\n`). There is no
/// line-length limit: a line is buffered in full until its terminator
/// arrives.
#[derive(Debug, Default)]
pub struct LineScanner {
    buf: Vec<u8>,
}

impl LineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk of raw bytes from the stream.
    pub fn extend(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Pop the next fully terminated line, terminator included.
    ///
    /// Returns `None` once the buffered data contains no `\n`; more input may
    /// still complete the pending line.
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.buf.iter().position(|&b| b == b'\n')?;
        let line: Vec<u8> = self.buf.drain(..=end).collect();
        Some(String::from_utf8_lossy(&line).into_owned())
    }

    /// Consume the scanner, returning the unterminated tail if one exists.
    pub fn finish(self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(String::from_utf8_lossy(&self.buf).into_owned())
        }
    }
}
