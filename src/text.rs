/// Drops every non-letter and uppercases the rest. Only the 52 ASCII
/// letters count as letters, keeping every survivor inside `A..=Z`.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
