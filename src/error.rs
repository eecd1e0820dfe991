use thiserror::Error;

/// Error types for `SlotBuf` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum SlotBufError {
    /// Flat construction source is not a whole number of slots
    #[error("flat source length {len} is not a multiple of slot width {width}")]
    UnalignedLength {
        /// Length of the source that was offered
        len: usize,
        /// Slot width of the target buffer
        width: usize,
    },
    /// Append source yielded a different element count than one slot
    #[error("slot source yielded {actual} elements, expected exactly {expected}")]
    SlotWidthMismatch {
        /// Slot width of the target buffer
        expected: usize,
        /// Number of elements the source actually yielded
        actual: usize,
    },
}
