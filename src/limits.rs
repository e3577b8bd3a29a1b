//! Fixed thresholds used by the detection heuristics.

/// Shortest candidate that can be a link, in `char`s.
/// The shortest forms are `ab://c` and `a@b.de`.
pub const MIN_CANDIDATE_CHARS: usize = 6;

/// Largest input the `u32` ranges can address.
/// Longer inputs are passed through unchanged.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;
