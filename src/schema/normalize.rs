/// Title-case every whitespace-separated word and join them with single spaces.
///
/// Only the first character of each word changes; the rest is kept as typed.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_email(raw: &str) -> String {
    raw.to_lowercase()
}

/// Numeric reading of a raw knowledge input.
///
/// Blank input reads as `0`. Anything that does not parse to a finite number
/// yields `None`, which the schema reports as out of range.
pub fn coerce_knowledge(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_each_word() {
        assert_eq!(normalize_name("joão silva"), "João Silva");
        assert_eq!(normalize_name("  ana   maria lima "), "Ana Maria Lima");
        assert_eq!(normalize_name("mcDonald"), "McDonald");
    }

    #[test]
    fn single_character_words_are_upper_cased() {
        assert_eq!(normalize_name("a b c"), "A B C");
        assert_eq!(normalize_name("é"), "É");
    }

    #[test]
    fn name_normalization_is_idempotent() {
        for raw in ["joão silva", "x", "  ana\tlima ", "ÉDOUARD de la cruz"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn lower_cases_email() {
        assert_eq!(
            normalize_email("User@Example.COM.BR"),
            "user@example.com.br"
        );
    }

    #[test]
    fn coerces_knowledge_inputs() {
        assert_eq!(coerce_knowledge("80"), Some(80.0));
        assert_eq!(coerce_knowledge(" 60 "), Some(60.0));
        assert_eq!(coerce_knowledge(""), Some(0.0));
        assert_eq!(coerce_knowledge("1e2"), Some(100.0));
        assert_eq!(coerce_knowledge("+5"), Some(5.0));
        assert_eq!(coerce_knowledge("abc"), None);
        assert_eq!(coerce_knowledge("inf"), None);
        assert_eq!(coerce_knowledge("NaN"), None);
    }
}
