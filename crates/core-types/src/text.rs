/// Reverses `input` and writes every character twice.
///
/// `"abc"` becomes `"ccbbaa"`. Works on `char`s, so multi-byte text keeps
/// its characters intact.
pub fn reverse_doubled(input: &str) -> String {
    input.chars().rev().flat_map(|c| [c, c]).collect()
}
