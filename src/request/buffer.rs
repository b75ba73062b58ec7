//! Growable read buffer used by the request assembler.

/// A byte buffer with a filled prefix and an unfilled tail.
///
/// The buffer doubles its capacity whenever a read is requested while it is full,
/// so reaching a final size `n` from capacity `c` takes `log2(n / c)` reallocations.
/// Consumed bytes are removed by shifting the unconsumed remainder to the front.
#[derive(Debug)]
pub(crate) struct ReadBuffer {
    data: Vec<u8>,
    filled: usize,
}

impl ReadBuffer {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(1)],
            filled: 0,
        }
    }

    /// The unfilled tail, growing the buffer first if it has no room left.
    pub(crate) fn unfilled_mut(&mut self) -> &mut [u8] {
        if self.filled == self.data.len() {
            let doubled = self.data.len() * 2;
            self.data.resize(doubled, 0);
        }
        &mut self.data[self.filled..]
    }

    /// Mark `n` more bytes of the tail as filled.
    pub(crate) fn advance(&mut self, n: usize) {
        debug_assert!(self.filled + n <= self.data.len());
        self.filled += n;
    }

    pub(crate) fn filled(&self) -> &[u8] {
        &self.data[..self.filled]
    }

    /// Drop the first `n` filled bytes, compacting the remainder to the front.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!(n <= self.filled);
        self.data.copy_within(n..self.filled, 0);
        self.filled -= n;
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }
}
