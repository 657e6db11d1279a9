/// Comparison form of a verb name: lowercased, surrounding whitespace removed.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
