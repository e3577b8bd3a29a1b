//! Compact byte range into the input text.
//!
//! Uses `u32` offsets (8 bytes vs 16 for a usize pair), which caps
//! inputs at 4GB. See [`crate::limits::MAX_INPUT_LEN`].

/// Byte range into an input string.
///
/// Both ends always sit on `char` boundaries of the text the range was
/// produced from.
///
/// # Example
/// ```
/// use linkernizer::Range;
///
/// let input = "see www.example.org";
/// let range = Range::new(4, 19);
/// assert_eq!(range.slice(input), "www.example.org");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The text this range covers.
    #[inline]
    pub fn slice<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_usize()..self.end_usize()]
    }

    /// The bytes this range covers.
    #[inline]
    pub fn slice_bytes<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }

    /// Drop `n` bytes from the end.
    #[inline]
    pub fn shrink_end(&mut self, n: u32) {
        debug_assert!(n <= self.len());
        self.end -= n;
    }

    /// Drop `n` bytes from both ends.
    #[inline]
    pub fn shrink_both(&mut self, n: u32) {
        debug_assert!(2 * n <= self.len());
        self.start += n;
        self.end -= n;
    }
}
