use core::iter::FusedIterator;
use core::mem;

/// Iterator over the slots of a `SlotBuf`, yielding one fixed-width
/// window per step.
///
/// Created by [`SlotBuf::slots`](crate::SlotBuf::slots). Double-ended and
/// exact-size; `nth` and `nth_back` are O(1), so cursor-style random
/// access costs the same as direct indexing.
///
/// This iterator implements `Clone`.
#[derive(Clone, Debug)]
pub struct Slots<'a, T, const W: usize> {
    // Invariant: remaining.len() is a multiple of W (constructed from a
    // SlotBuf store and consumed one whole slot at a time).
    remaining: &'a [T],
}

impl<'a, T, const W: usize> Slots<'a, T, W> {
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self { remaining: data }
    }
}

impl<'a, T, const W: usize> Iterator for Slots<'a, T, W> {
    type Item = &'a [T; W];

    fn next(&mut self) -> Option<Self::Item> {
        let (slot, rest) = self.remaining.split_first_chunk::<W>()?;
        self.remaining = rest;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let slots = self.remaining.len() / W;
        (slots, Some(slots))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let skip = match n.checked_mul(W) {
            Some(skip) if skip < self.remaining.len() => skip,
            _ => {
                self.remaining = &[];
                return None;
            }
        };
        self.remaining = &self.remaining[skip..];
        self.next()
    }

    fn count(self) -> usize {
        self.remaining.len() / W
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T, const W: usize> DoubleEndedIterator for Slots<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (rest, slot) = self.remaining.split_last_chunk::<W>()?;
        self.remaining = rest;
        Some(slot)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let keep = match n.checked_mul(W) {
            Some(skip) if skip < self.remaining.len() => self.remaining.len() - skip,
            _ => {
                self.remaining = &[];
                return None;
            }
        };
        self.remaining = &self.remaining[..keep];
        self.next_back()
    }
}

impl<T, const W: usize> ExactSizeIterator for Slots<'_, T, W> {}

impl<T, const W: usize> FusedIterator for Slots<'_, T, W> {}

/// Mutable iterator over the slots of a `SlotBuf`, yielding disjoint
/// fixed-width windows.
///
/// Created by [`SlotBuf::slots_mut`](crate::SlotBuf::slots_mut).
#[derive(Debug)]
pub struct SlotsMut<'a, T, const W: usize> {
    // Same invariant as Slots: remaining.len() is a multiple of W.
    remaining: &'a mut [T],
}

impl<'a, T, const W: usize> SlotsMut<'a, T, W> {
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self { remaining: data }
    }
}

impl<'a, T, const W: usize> Iterator for SlotsMut<'a, T, W> {
    type Item = &'a mut [T; W];

    fn next(&mut self) -> Option<Self::Item> {
        let data = mem::take(&mut self.remaining);
        let (slot, rest) = data.split_first_chunk_mut::<W>()?;
        self.remaining = rest;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let slots = self.remaining.len() / W;
        (slots, Some(slots))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let data = mem::take(&mut self.remaining);
        let skip = match n.checked_mul(W) {
            Some(skip) if skip < data.len() => skip,
            _ => return None,
        };
        self.remaining = &mut data[skip..];
        self.next()
    }

    fn count(self) -> usize {
        self.remaining.len() / W
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T, const W: usize> DoubleEndedIterator for SlotsMut<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let data = mem::take(&mut self.remaining);
        let (rest, slot) = data.split_last_chunk_mut::<W>()?;
        self.remaining = rest;
        Some(slot)
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        let data = mem::take(&mut self.remaining);
        let keep = match n.checked_mul(W) {
            Some(skip) if skip < data.len() => data.len() - skip,
            _ => return None,
        };
        self.remaining = &mut data[..keep];
        self.next_back()
    }
}

impl<T, const W: usize> ExactSizeIterator for SlotsMut<'_, T, W> {}

impl<T, const W: usize> FusedIterator for SlotsMut<'_, T, W> {}
