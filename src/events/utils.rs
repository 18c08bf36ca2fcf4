/// Return the number of Unicode scalar values (characters) in the input.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character index to a byte index for slicing.
/// If `ci` is at or past the end, returns `s.len()`.
pub fn byte_index_for_char(s: &str, ci: usize) -> usize {
    s.char_indices().nth(ci).map_or(s.len(), |(i, _)| i)
}
