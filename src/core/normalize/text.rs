//! String helpers shared by the normalizers.

/// Title-case a phrase: every space-separated word gets an upper-case first
/// character and a lower-case remainder.
///
/// Only single spaces split words, so runs of spaces are preserved.
pub fn to_title_case(phrase: &str) -> String {
    phrase
        .to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The value, if it is present and not blank
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_single_word() {
        assert_eq!(to_title_case("BLONDE"), "Blonde");
    }

    #[test]
    fn title_case_multiple_words() {
        assert_eq!(to_title_case("light brown"), "Light Brown");
        assert_eq!(to_title_case("bOTH aRMS"), "Both Arms");
    }

    #[test]
    fn title_case_is_stable() {
        let once = to_title_case("Light Brown");
        assert_eq!(to_title_case(&once), once);
    }

    #[test]
    fn title_case_keeps_space_runs() {
        assert_eq!(to_title_case("left  arm"), "Left  Arm");
    }

    #[test]
    fn title_case_only_splits_on_spaces() {
        assert_eq!(to_title_case("half-asian"), "Half-asian");
    }

    #[test]
    fn present_rejects_blank_values() {
        assert_eq!(present(&Some("x".to_string())), Some("x"));
        assert_eq!(present(&Some("   ".to_string())), None);
        assert_eq!(present(&Some(String::new())), None);
        assert_eq!(present(&None), None);
    }
}
