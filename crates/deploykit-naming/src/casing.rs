//! Casing transforms shared by the naming functions.

/// Capitalizes every hyphen-delimited word and joins them without separator.
///
/// The first character of each word is upper-cased and the rest lower-cased:
/// `feature-1` becomes `Feature1`, `my-APP` becomes `MyApp`.
#[must_use]
pub fn pascal_case(value: &str) -> String {
    value.split('-').map(capitalize).collect()
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}

/// Normalizes a name segment for use in resource names, paths, and domains.
///
/// Lower-cases the value and replaces every character outside `[a-z0-9-]`
/// with `-`, so `Feature/Login` becomes `feature-login`.
#[must_use]
pub fn normalize_segment(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
