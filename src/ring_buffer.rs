use thiserror::Error;

/// Errors returned by [`RingBuffer`] operations.
///
/// Every error is recoverable and leaves the buffer untouched: the caller may
/// retry a `push` after a `pop` frees a slot, or a `pop` after a `push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No free slot left; `(head + 1) % capacity == tail`.
    #[error("ring buffer is full")]
    Full,
    /// No element to read; `head == tail`.
    #[error("ring buffer is empty")]
    Empty,
    /// The requested peek offset is past the last occupied element.
    #[error("peek offset out of bounds")]
    OutOfBounds,
}

/// Fixed-capacity circular FIFO over caller-supplied storage.
///
/// The buffer never allocates: it borrows a slice the caller owns and tracks
/// two cursors over it. `head` is the next slot `push` writes, `tail` the
/// next slot `pop` reads. The buffer is empty when `head == tail` and full
/// when `head` is one step behind `tail`, so one slot of the backing slice is
/// permanently sacrificed to tell the two states apart without a counter
/// field: a buffer over `N` slots holds at most `N - 1` elements.
///
/// Popped slots are not cleared. Occupancy is defined purely by the cursor
/// range `[tail, head)`, so stale values linger in the backing slice until
/// the next wraparound write. That is harmless for correctness but worth
/// knowing if `T` carries sensitive data.
#[derive(Debug)]
pub struct RingBuffer<'a, T> {
    backing: &'a mut [T],
    head: usize,
    tail: usize,
}

impl<'a, T: Copy> RingBuffer<'a, T> {
    /// Bind a buffer to `backing` for the lifetime of the borrow.
    ///
    /// The buffer starts empty. Capacity equals `backing.len()` and can never
    /// change; the slice is exclusively borrowed, so nothing else can touch
    /// the storage while the buffer lives.
    ///
    /// # Panics
    /// Panics if `backing` is empty; a zero-slot buffer has no valid cursor.
    pub fn new(backing: &'a mut [T]) -> Self {
        assert!(!backing.is_empty(), "backing storage must hold at least one slot");
        Self {
            backing,
            head: 0,
            tail: 0,
        }
    }

    /// Number of slots in the backing storage.
    ///
    /// Note this is one more than the element count the buffer can hold; see
    /// the type-level docs for the sacrificed slot.
    pub fn capacity(&self) -> usize {
        self.backing.len()
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        (self.head + self.backing.len() - self.tail) % self.backing.len()
    }

    /// True if no element is held (`pop` would fail).
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// True if no slot is free (`push` would fail).
    pub fn is_full(&self) -> bool {
        (self.head + 1) % self.backing.len() == self.tail
    }

    /// Append `value` behind the newest element.
    ///
    /// # Returns
    /// * `Ok(())` if a slot was free
    /// * `Err(Error::Full)` otherwise; neither the cursors nor any slot is
    ///   written on this path
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let next = (self.head + 1) % self.backing.len();
        if next == self.tail {
            return Err(Error::Full);
        }
        self.backing[self.head] = value;
        self.head = next;
        Ok(())
    }

    /// Remove and return the oldest element.
    ///
    /// Ignoring the returned value gives pop-and-drop.
    ///
    /// # Returns
    /// * `Ok(value)` with the oldest element
    /// * `Err(Error::Empty)` if nothing is held; no mutation
    pub fn pop(&mut self) -> Result<T, Error> {
        if self.head == self.tail {
            return Err(Error::Empty);
        }
        let value = self.backing[self.tail];
        self.tail = (self.tail + 1) % self.backing.len();
        Ok(value)
    }

    /// Read the element `offset` positions past the oldest one, without
    /// consuming anything. `peek(0)` is the element the next `pop` returns.
    ///
    /// Offsets are checked against the occupied count, not the raw capacity,
    /// so a slot that was never written or was already popped cannot be read
    /// back. In particular `peek(0)` on an empty buffer is an error.
    ///
    /// # Returns
    /// * `Ok(value)` for `offset < len()`
    /// * `Err(Error::OutOfBounds)` otherwise
    pub fn peek(&self, offset: usize) -> Result<T, Error> {
        if offset >= self.len() {
            return Err(Error::OutOfBounds);
        }
        Ok(self.backing[(self.tail + offset) % self.backing.len()])
    }
}
