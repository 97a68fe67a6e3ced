//! Case-insensitive matching of texture paths against reference substrings

/// Returns `true` if `needle` occurs in `haystack`, ignoring ASCII case.
///
/// Texture paths coming from game data mix case freely (`Effects\FXFire01.dds`
/// vs `effects\fxfire01.dds`), so every table match goes through here. An
/// empty needle never matches.
pub fn icontains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }

    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
