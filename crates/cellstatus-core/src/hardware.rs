//! Hardware model eligibility for cellular reporting.

/// Hardware models that ship with cellular modules.
///
/// Static configuration, matched case-sensitively against the element's
/// `model_name`. New cellular-capable models must be added here by hand.
pub const CELLULAR_MODELS: [&str; 8] = [
    "ion 1200-c-na",
    "ion 1200-c-row",
    "ion 1200-c5g-ww",
    "ion 1200-c5g-exp",
    "ion 1200-s-c-na",
    "ion 1200-s-c-row",
    "ion 1200-s-c5g-ww",
    "ion 3200h-c5g-ww",
];

/// Whether the given hardware model supports cellular modules.
pub fn is_cellular_capable(model_name: &str) -> bool {
    CELLULAR_MODELS.contains(&model_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_are_capable() {
        assert!(is_cellular_capable("ion 1200-c-na"));
        assert!(is_cellular_capable("ion 3200h-c5g-ww"));
    }

    #[test]
    fn test_unknown_models_are_not_capable() {
        assert!(!is_cellular_capable("ion 3000"));
        assert!(!is_cellular_capable(""));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!is_cellular_capable("ION 1200-C-NA"));
        assert!(!is_cellular_capable("Ion 1200-c-na"));
    }
}
