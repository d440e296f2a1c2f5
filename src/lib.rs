//! # cbuff - Circular Buffer over Caller-Supplied Storage
//!
//! A fixed-capacity FIFO queue for environments without dynamic allocation.
//!
//! ## Design
//!
//! - The buffer owns no memory: it borrows a fixed-length slice the caller
//!   allocated (statically, on the stack, wherever) and only tracks cursors
//! - Empty and full are told apart by cursor comparison alone, trading one
//!   storage slot for the absence of a counter field: `N` slots hold up to
//!   `N - 1` elements
//! - Every operation is O(1), non-blocking, and reports failure through a
//!   typed `Result` with the buffer left untouched
//! - Single-owner by construction: the API takes `&mut self` and carries no
//!   internal synchronization, so interrupt-handler use stays zero-overhead;
//!   layer a lock or an SPSC discipline on top if you need concurrency
//!
//! ## Example
//!
//! ```
//! use cbuff::{Error, RingBuffer};
//!
//! let mut slots = [0u32; 5];
//! let mut rb = RingBuffer::new(&mut slots);
//!
//! rb.push(1).unwrap();
//! rb.push(2).unwrap();
//!
//! assert_eq!(rb.peek(0), Ok(1));
//! assert_eq!(rb.pop(), Ok(1));
//! assert_eq!(rb.pop(), Ok(2));
//! assert_eq!(rb.pop(), Err(Error::Empty));
//! ```

#![warn(missing_docs)]

mod ring_buffer;

pub use ring_buffer::{Error, RingBuffer};
