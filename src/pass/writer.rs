//! Buffered writer that wipes what it staged.

use std::io::{self, Write};

use zeroize::Zeroize;

const CAPACITY: usize = 8 * 1024;

/// Like `BufWriter`, but the staging buffer is zeroized after every flush
/// and on drop, so password bytes do not linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}
