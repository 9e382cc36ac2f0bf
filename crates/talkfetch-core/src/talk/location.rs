//! Room name normalization for video URLs.

/// Normalizes a calendar location into the room component of a video URL:
/// all `.` removed, cut at the first whitespace, lowercased.
///
/// `"H.1302 (Depage)"` → `"h1302"`, `"Janson Room"` → `"janson"`.
pub fn normalize_location(location: &str) -> String {
    let undotted = location.replace('.', "");
    undotted
        .split(char::is_whitespace)
        .next()
        .unwrap_or("")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_dots_and_trailing_words() {
        assert_eq!(normalize_location("Janson Room"), "janson");
        assert_eq!(normalize_location("H.1302 (Depage)"), "h1302");
        assert_eq!(normalize_location("UB2.252A (Lameere)"), "ub2252a");
        assert_eq!(normalize_location("K.1.105\t(La Fontaine)"), "k1105");
    }

    #[test]
    fn idempotent() {
        for raw in ["Janson Room", "H.1302 (Depage)", "AW1.120", "", " leading"] {
            let once = normalize_location(raw);
            assert_eq!(normalize_location(&once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn leading_whitespace_yields_empty_room() {
        assert_eq!(normalize_location(" Janson"), "");
    }
}
