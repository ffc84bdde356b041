//! Progress bar arithmetic.

/// Number of fill characters drawn at `step` out of `total` for a bar `width` wide.
///
/// Uses floor division, so the bar only reaches `width` at `step == total`.
/// `total` must be non-zero; plans are validated before rendering. The product
/// is taken in `u128`, so no `usize` inputs can overflow it.
pub fn fill_length(width: usize, step: usize, total: usize) -> usize {
    let fill = (width as u128 * step as u128) / total as u128;
    usize::try_from(fill).unwrap_or(usize::MAX)
}

/// The visible content of one redraw, without the leading carriage return.
pub fn bar_line(fill_char: char, fill: usize) -> String {
    std::iter::repeat(fill_char).take(fill).collect()
}
