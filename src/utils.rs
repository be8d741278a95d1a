/// Parse free-form numeric text from an input element.
///
/// Empty, whitespace-only and non-numeric text yields `None`. Surrounding
/// whitespace, signs, fractions and exponents are accepted.
pub fn parse_numeric_input(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Build the DOM id of an element belonging to one timeline instance.
pub fn element_id(instance: uuid::Uuid, part: &str) -> String {
    format!("timeline-{}-{}", instance.simple(), part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric_input() {
        assert_eq!(parse_numeric_input("42"), Some(42.0));
        assert_eq!(parse_numeric_input("  007 "), Some(7.0));
        assert_eq!(parse_numeric_input("-1"), Some(-1.0));
        assert_eq!(parse_numeric_input("5.6"), Some(5.6));
        assert_eq!(parse_numeric_input("1e3"), Some(1000.0));
        assert_eq!(parse_numeric_input(""), None);
        assert_eq!(parse_numeric_input("   "), None);
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("NaN"), None);
    }

    #[test]
    fn test_element_id_is_instance_scoped() {
        let a = uuid::Uuid::new_v4();
        let b = uuid::Uuid::new_v4();
        assert_ne!(element_id(a, "ruler"), element_id(b, "ruler"));
        assert!(element_id(a, "ruler").ends_with("-ruler"));
    }
}
