use alloc::vec::Vec;

use core::ops::{Index, IndexMut};
use core::slice;

use crate::error::SlotBufError;
use crate::iter::{Slots, SlotsMut};

/// A growable flat buffer of fixed-width slots.
///
/// The buffer owns a single contiguous store whose length is always an
/// exact multiple of the slot width `W`. Slots are addressed by index;
/// slot `i` occupies elements `i * W .. (i + 1) * W`.
///
/// `SlotBuf` is move-only: it deliberately does not implement `Clone`,
/// so a potentially large flat store is never duplicated implicitly.
/// Use [`SlotBuf::into_flat`] to release the backing storage.
#[derive(Debug)]
pub struct SlotBuf<T, const W: usize> {
    data: Vec<T>,
}

impl<T, const W: usize> SlotBuf<T, W> {
    /// Creates an empty buffer with zero slots.
    #[must_use]
    pub fn new() -> Self {
        const { assert!(W > 0, "slot width W must be non-zero") }
        Self { data: Vec::new() }
    }

    /// Creates a buffer of `slots` value-initialized slots.
    ///
    /// Every element of the `slots * W` store is `T::default()`
    /// (zero for numeric types).
    #[must_use]
    pub fn with_slots(slots: usize) -> Self
    where
        T: Clone + Default,
    {
        const { assert!(W > 0, "slot width W must be non-zero") }
        let mut data = Vec::new();
        data.resize(slots * W, T::default());
        Self { data }
    }

    /// Adopts an owned flat sequence as the backing store, without copying.
    ///
    /// # Errors
    ///
    /// Returns `SlotBufError::UnalignedLength` if `data.len()` is not an
    /// exact multiple of `W`.
    pub fn from_flat(data: Vec<T>) -> Result<Self, SlotBufError> {
        const { assert!(W > 0, "slot width W must be non-zero") }
        if data.len() % W != 0 {
            return Err(SlotBufError::UnalignedLength {
                len: data.len(),
                width: W,
            });
        }
        Ok(Self { data })
    }

    /// Copies a contiguous source window into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns `SlotBufError::UnalignedLength` if `data.len()` is not an
    /// exact multiple of `W`.
    pub fn from_slice(data: &[T]) -> Result<Self, SlotBufError>
    where
        T: Clone,
    {
        const { assert!(W > 0, "slot width W must be non-zero") }
        if data.len() % W != 0 {
            return Err(SlotBufError::UnalignedLength {
                len: data.len(),
                width: W,
            });
        }
        Ok(Self {
            data: data.to_vec(),
        })
    }

    /// Number of whole slots currently stored.
    #[must_use]
    pub fn num_slots(&self) -> usize {
        self.data.len() / W
    }

    /// Number of elements currently stored; always `num_slots() * W`.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of slots the buffer can hold before reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity() / W
    }

    /// Gets the window of slot `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[T; W]> {
        let start = index.checked_mul(W)?;
        self.data.get(start..)?.first_chunk()
    }

    /// Gets the mutable window of slot `index`.
    ///
    /// Returns `None` if `index` is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut [T; W]> {
        let start = index.checked_mul(W)?;
        self.data.get_mut(start..)?.first_chunk_mut()
    }

    /// Gets the window of slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`SlotBuf::num_slots`]; otherwise the
    /// returned window references memory outside the store and behavior
    /// is undefined.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &[T; W] {
        // SAFETY: the caller guarantees index < num_slots(), so the W
        // elements starting at index * W lie inside the initialized store.
        unsafe { &*self.data.as_ptr().add(index * W).cast::<[T; W]>() }
    }

    /// Gets the mutable window of slot `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Same contract as [`SlotBuf::get_unchecked`]: `index` must be less
    /// than [`SlotBuf::num_slots`].
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut [T; W] {
        // SAFETY: the caller guarantees index < num_slots().
        unsafe { &mut *self.data.as_mut_ptr().add(index * W).cast::<[T; W]>() }
    }

    /// Ensures capacity for at least `slots` whole slots.
    ///
    /// Does not change the logical length. Amortizes future growth when
    /// the target slot count is known up front.
    pub fn reserve(&mut self, slots: usize) {
        let target = slots * W;
        if target > self.data.len() {
            self.data.reserve(target - self.data.len());
        }
    }

    /// Sets the logical length to exactly `slots` slots.
    ///
    /// Growing value-initializes the new slots (`T::default()`).
    /// Shrinking truncates whole slots from the end; the surviving prefix
    /// is untouched.
    pub fn resize(&mut self, slots: usize)
    where
        T: Clone + Default,
    {
        self.data.resize(slots * W, T::default());
    }

    /// Appends one slot from an owned array, moving its elements.
    pub fn push(&mut self, slot: [T; W]) {
        self.data.reserve(W);
        self.data.extend(slot);
    }

    /// Appends one slot by copying a borrowed window.
    pub fn push_slice(&mut self, slot: &[T; W])
    where
        T: Clone,
    {
        self.data.extend_from_slice(slot);
    }

    /// Appends one slot from any source iterable exactly `W` times.
    ///
    /// Accepts an open set of source shapes: owned sequences, arrays,
    /// ranges, adapters. Elements are moved out of the source.
    ///
    /// # Panics
    ///
    /// Panics if the source does not yield exactly `W` elements. Use
    /// [`SlotBuf::try_append`] to handle wrong-width sources gracefully.
    #[allow(clippy::expect_used)]
    pub fn append<I>(&mut self, slot: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.try_append(slot)
            .expect("append source must yield exactly one slot of elements");
    }

    /// Appends one slot from any source iterable exactly `W` times.
    ///
    /// On error the buffer is rolled back to its previous length, so the
    /// whole-slot invariant holds even after a failed append.
    ///
    /// # Errors
    ///
    /// Returns `SlotBufError::SlotWidthMismatch` if the source yields
    /// fewer or more than `W` elements.
    pub fn try_append<I>(&mut self, slot: I) -> Result<(), SlotBufError>
    where
        I: IntoIterator<Item = T>,
    {
        let old_len = self.data.len();
        self.data.reserve(W);

        let mut source = slot.into_iter();
        self.data.extend(source.by_ref().take(W));

        let taken = self.data.len() - old_len;
        let excess = if taken == W { source.count() } else { 0 };
        if taken < W || excess > 0 {
            self.data.truncate(old_len);
            return Err(SlotBufError::SlotWidthMismatch {
                expected: W,
                actual: taken + excess,
            });
        }
        Ok(())
    }

    /// The whole store as a flat slice, ignoring slot boundaries.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The whole store as a flat mutable slice, ignoring slot boundaries.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates every element in storage order.
    ///
    /// The iterator is double-ended; use `.rev()` for reverse traversal.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates every element mutably in storage order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterates the buffer one whole slot at a time, yielding a
    /// fixed-width window per step.
    #[must_use]
    pub fn slots(&self) -> Slots<'_, T, W> {
        Slots::new(&self.data)
    }

    /// Iterates the buffer one whole slot at a time, yielding disjoint
    /// mutable windows.
    #[must_use]
    pub fn slots_mut(&mut self) -> SlotsMut<'_, T, W> {
        SlotsMut::new(&mut self.data)
    }

    /// Releases the backing storage to the caller.
    #[must_use]
    pub fn into_flat(self) -> Vec<T> {
        self.data
    }
}

impl<T, const W: usize> Default for SlotBuf<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize> TryFrom<Vec<T>> for SlotBuf<T, W> {
    type Error = SlotBufError;

    fn try_from(data: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_flat(data)
    }
}

impl<T, const W: usize> Index<usize> for SlotBuf<T, W> {
    type Output = [T; W];

    /// Indexed slot access.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_slots()`.
    fn index(&self, index: usize) -> &Self::Output {
        let slots = self.num_slots();
        self.get(index).unwrap_or_else(|| {
            panic!("slot index {index} out of bounds for buffer of {slots} slots")
        })
    }
}

impl<T, const W: usize> IndexMut<usize> for SlotBuf<T, W> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let slots = self.num_slots();
        self.get_mut(index).unwrap_or_else(|| {
            panic!("slot index {index} out of bounds for buffer of {slots} slots")
        })
    }
}

impl<'a, T, const W: usize> IntoIterator for &'a SlotBuf<T, W> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const W: usize> IntoIterator for &'a mut SlotBuf<T, W> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T, const W: usize> IntoIterator for SlotBuf<T, W> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_slot_arithmetic() {
        let buf: SlotBuf<u8, 4> = SlotBuf::with_slots(3);
        assert_eq!(buf.num_slots(), 3);
        assert_eq!(buf.num_elements(), 12);
        assert_eq!(buf.num_elements(), buf.num_slots() * 4);
    }

    #[test]
    fn test_get_at_exact_end_is_none() {
        let buf: SlotBuf<u8, 4> = SlotBuf::with_slots(2);
        assert!(buf.get(1).is_some());
        assert!(buf.get(2).is_none());
    }

    #[test]
    fn test_try_append_rolls_back_partial_slot() {
        let mut buf: SlotBuf<u8, 4> = SlotBuf::new();
        buf.push([1, 2, 3, 4]);

        assert!(buf.try_append(vec![9, 9]).is_err());

        assert_eq!(buf.num_elements(), 4);
        assert_eq!(buf.num_slots(), 1);
        assert_eq!(buf[0], [1, 2, 3, 4]);
    }

    #[test]
    fn test_unchecked_access_matches_checked() {
        let mut buf: SlotBuf<u32, 3> = SlotBuf::new();
        buf.push([1, 2, 3]);
        buf.push([4, 5, 6]);

        // SAFETY: both indices are < num_slots().
        let slot = unsafe { buf.get_unchecked(1) };
        assert_eq!(slot, buf.get(1).unwrap());
        assert_eq!(slot, &[4, 5, 6]);
    }
}
