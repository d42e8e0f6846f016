//! Thread-local buffer pool for efficient memory reuse.

use std::cell::RefCell;
use std::io::Read;

/// Default buffer size for pooled buffers.
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024; // 8 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A reusable read-staging buffer.
pub(crate) struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take() -> Self {
        THREAD_BUFFER_POOL.with(|pool| {
            let mut pool = pool.borrow_mut();
            if let Some(data) = pool.pop() {
                Self { data }
            } else {
                Self {
                    data: Vec::with_capacity(DEFAULT_BUFFER_SIZE),
                }
            }
        })
    }

    /// Fills the buffer with one read of at most `max` bytes from `reader`.
    ///
    /// Returns the bytes actually read; an empty slice means end of stream.
    pub fn fill_from<R: Read>(&mut self, reader: &mut R, max: usize) -> std::io::Result<&[u8]> {
        self.data.resize(max, 0);
        let n = reader.read(&mut self.data[..max])?;
        self.data.truncate(n);
        Ok(&self.data)
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        // Return the buffer to the pool if it's not too large
        if self.data.capacity() <= DEFAULT_BUFFER_SIZE * 2 {
            self.data.clear();
            THREAD_BUFFER_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::take()
    }
}

// Thread-local buffer pool
thread_local! {
    static THREAD_BUFFER_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
