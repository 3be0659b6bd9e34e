//! Output sinks.
//!
//! Rendering never buffers: every literal run and every rendered unit goes to
//! the sink in one `write_all`, and the returned counts add up to exactly the
//! bytes the sink accepted.

use std::io::{self, Write};

/// Write `bytes` in full and report how many were written.
pub(crate) fn emit<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) -> io::Result<usize> {
    out.write_all(bytes)?;
    Ok(bytes.len())
}

/// Process standard output, flushed after every write.
#[derive(Debug)]
pub struct StdoutSink {
    inner: io::Stdout,
}

impl StdoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut lock = self.inner.lock();
        let n = lock.write(buf)?;
        lock.flush()?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Passes writes through and tallies the bytes the inner writer accepted.
#[derive(Debug)]
pub struct CountingSink<W> {
    inner: W,
    written: usize,
    writes: usize,
}

impl<W: Write> CountingSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            written: 0,
            writes: 0,
        }
    }

    /// Bytes accepted by the inner writer.
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }

    /// Number of successful `write` calls.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        self.writes += 1;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
