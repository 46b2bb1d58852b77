//! Pool of reusable growable buffers
//!
//! List parsing needs short-lived vectors at every nesting level. Instead of
//! allocating a fresh `Vec` each time, the parser checks one out of a
//! [`BufferPool`]; the returned [`PooledBuffer`] clears itself and goes back
//! to the pool when dropped, so backing storage grows to the high-water mark
//! and then stays put.
//!
//! # Usage Pattern
//! ```ignore
//! let mut tokens = parser.token_pool().get();
//! tokens.push(parser.consume());
//! let trivia = Trivia::skipped(&tokens);
//! // tokens drops here, storage returns to the pool
//! ```

use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

type FreeList<T> = Rc<RefCell<Vec<Vec<T>>>>;

/// A pool of empty vectors waiting to be reused
pub struct BufferPool<T> {
    free: FreeList<T>,
}

impl<T> BufferPool<T> {
    pub fn new() -> Self {
        Self {
            free: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Check out an empty buffer.
    ///
    /// The handle does not borrow the pool, so the parser stays free to call
    /// `&mut self` methods while it is alive.
    pub fn get(&self) -> PooledBuffer<T> {
        let buffer = self.free.borrow_mut().pop().unwrap_or_default();
        PooledBuffer {
            buffer,
            pool: Rc::clone(&self.free),
        }
    }

    /// Number of buffers sitting idle in the pool
    pub fn available(&self) -> usize {
        self.free.borrow().len()
    }
}

impl<T> Default for BufferPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for BufferPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("available", &self.available())
            .finish()
    }
}

/// Exclusive handle to a checked-out buffer.
///
/// Dereferences to `Vec<T>`. On drop the contents are cleared and the storage
/// is handed back to its pool.
pub struct PooledBuffer<T> {
    buffer: Vec<T>,
    pool: FreeList<T>,
}

impl<T> PooledBuffer<T> {
    /// Move the contents out into an owned `Vec`, leaving the pooled storage
    /// empty but allocated
    pub fn take(&mut self) -> Vec<T> {
        self.buffer.drain(..).collect()
    }
}

impl<T: Clone> PooledBuffer<T> {
    /// Copy the contents into an owned `Vec`
    pub fn copy(&self) -> Vec<T> {
        self.buffer.clone()
    }
}

impl<T> Deref for PooledBuffer<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.buffer
    }
}

impl<T> DerefMut for PooledBuffer<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.buffer
    }
}

impl<T: fmt::Debug> fmt::Debug for PooledBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T> Drop for PooledBuffer<T> {
    fn drop(&mut self) {
        self.buffer.clear();
        let buffer = std::mem::take(&mut self.buffer);
        if let Ok(mut free) = self.pool.try_borrow_mut() {
            free.push(buffer);
        }
    }
}
