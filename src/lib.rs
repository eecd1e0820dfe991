#![no_std]
#![warn(unsafe_op_in_unsafe_fn)]

//! `SlotBuf`: a growable flat buffer of fixed-width slots.
//!
//! A `SlotBuf<T, W>` owns a single contiguous store of elements organized
//! into slots of exactly `W` elements each. It is the building block for
//! flat, struct-of-slots storage (e.g. rows of fixed-width records) where
//! callers want contiguous-memory efficiency without a heap allocation per
//! slot.
//!
//! The total element count is always an exact multiple of `W`; no operation
//! can leave a partial slot behind, including failed appends.
//!
//! # Slot access
//!
//! Indexing yields a fixed-width window `&[T; W]` directly into the store,
//! without copying:
//!
//! ```
//! use slotbuf::SlotBuf;
//!
//! let mut buf: SlotBuf<i32, 3> = SlotBuf::new();
//! buf.push([1, 2, 3]);
//! buf.push([4, 5, 6]);
//!
//! assert_eq!(buf.num_slots(), 2);
//! assert_eq!(buf[1][2], 6);
//! assert_eq!(buf.get(2), None);
//! ```
//!
//! # Two iteration views
//!
//! Flat iteration walks every element in storage order, ignoring slot
//! boundaries; slot-view iteration advances one whole slot per step and
//! yields a window per slot. Both views re-address the same storage.
//!
//! ```
//! use slotbuf::SlotBuf;
//!
//! let mut buf: SlotBuf<u32, 2> = SlotBuf::new();
//! buf.push([1, 2]);
//! buf.push([3, 4]);
//!
//! let flat: Vec<u32> = buf.iter().copied().collect();
//! assert_eq!(flat, vec![1, 2, 3, 4]);
//!
//! let sums: Vec<u32> = buf.slots().map(|s| s.iter().sum()).collect();
//! assert_eq!(sums, vec![3, 7]);
//! ```
//!
//! # Append sources
//!
//! Anything that can be iterated start-to-end with exactly `W` yielded
//! elements can be appended as one slot: owned arrays (moved, never
//! cloned), vectors, borrowed windows, or arbitrary iterators.
//!
//! ```
//! use slotbuf::SlotBuf;
//!
//! let mut buf: SlotBuf<i32, 3> = SlotBuf::new();
//! buf.push([1, 2, 3]);
//! buf.append(vec![4, 5, 6]);
//! buf.append(7..=9);
//! assert_eq!(buf.num_slots(), 3);
//!
//! // Checked variant: a wrong-width source is rejected and rolled back.
//! assert!(buf.try_append([1, 2]).is_err());
//! assert_eq!(buf.num_slots(), 3);
//! ```
//!
//! # Unchecked access
//!
//! Indexing and `get` are bounds-checked. Hot paths that can prove the
//! index valid can opt out with [`SlotBuf::get_unchecked`] and
//! [`SlotBuf::get_unchecked_mut`]; an out-of-range index there is undefined
//! behavior.
//!
//! # `no_std`
//!
//! The crate is `no_std` (it requires `alloc` for the backing store).
//! Enable the `std` feature to get `std`-flavored error trait wiring:
//! ```toml
//! [dependencies]
//! slotbuf = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::SlotBuf;
pub use crate::error::SlotBufError;
pub use crate::iter::{Slots, SlotsMut};
