//! Shortening of addresses and transaction hashes for display

/// Characters kept on each side by default
pub const DEFAULT_EDGE_LENGTH: usize = 12;

/// Keep the first and last `edge_length` characters around `...`
///
/// Identifiers shorter than `2 * edge_length` characters come back unchanged.
/// An `edge_length` of zero keeps no characters, leaving only `...`. Lengths
/// count chars, not bytes.
pub fn truncate_middle(identifier: &str, edge_length: usize) -> String {
    if identifier.is_empty() {
        return String::new();
    }
    let char_count = identifier.chars().count();
    if char_count < edge_length.saturating_mul(2) {
        return identifier.to_string();
    }

    let head: String = identifier.chars().take(edge_length).collect();
    let tail: String = identifier.chars().skip(char_count - edge_length).collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

    #[test]
    fn test_ethereum_address() {
        assert_eq!(
            truncate_middle(ADDRESS, DEFAULT_EDGE_LENGTH),
            "0x1234567890...cdef12345678"
        );
    }

    #[test]
    fn test_secret_address() {
        assert_eq!(
            truncate_middle("secret1rgm2m5t530tdzyd99775n6vzumxa5luxcllml4", 8),
            "secret1r...uxcllml4"
        );
    }

    #[test]
    fn test_short_identifiers_unchanged() {
        assert_eq!(truncate_middle("0x1234", 12), "0x1234");
        // 23 chars is below 2 * 12
        let almost = "a".repeat(23);
        assert_eq!(truncate_middle(&almost, 12), almost);
    }

    #[test]
    fn test_exact_boundary_is_shortened() {
        let exact = format!("{}{}", "a".repeat(12), "b".repeat(12));
        assert_eq!(
            truncate_middle(&exact, 12),
            format!("{}...{}", "a".repeat(12), "b".repeat(12))
        );
    }

    #[test]
    fn test_empty_and_zero_edge() {
        assert_eq!(truncate_middle("", 12), "");
        assert_eq!(truncate_middle(ADDRESS, 0), "...");
        assert_eq!(truncate_middle("a", 0), "...");
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(truncate_middle("ééééé-ñññññ", 2), "éé...ññ");
    }
}
