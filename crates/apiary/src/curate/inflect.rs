//! Heuristic inflection candidates for accepted base words.

/// Proposes candidate inflections for a base word.
///
/// Candidates are proposals only: the curator still requires each one to
/// exist in the normalized source corpus and to pass every non-frequency
/// filter before admitting it.
pub trait InflectionStrategy {
    fn candidates(&self, base: &str) -> Vec<String>;
}

/// Suffix-rule inflections: plural `s`/`es`/`ies`, past `d`/`ed`/`ied`,
/// progressive `ing` with `e`-elision. Not a morphological analyzer.
pub struct SuffixInflections;

impl InflectionStrategy for SuffixInflections {
    fn candidates(&self, base: &str) -> Vec<String> {
        if base.is_empty() {
            return Vec::new();
        }

        let ends_with_e = base.ends_with('e');
        let consonant_y = base.ends_with('y')
            && base
                .chars()
                .rev()
                .nth(1)
                .is_some_and(is_consonant);
        let takes_es = ["s", "x", "z", "ch", "sh"]
            .iter()
            .any(|suffix| base.ends_with(suffix));
        let stem = &base[..base.len() - 1];

        let mut candidates = Vec::new();
        let mut push = |candidate: String| {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        };

        push(format!("{base}s"));
        if takes_es {
            push(format!("{base}es"));
        }
        if consonant_y {
            push(format!("{stem}ies"));
        }

        if ends_with_e {
            push(format!("{base}d"));
            push(format!("{stem}ing"));
        } else if consonant_y {
            push(format!("{stem}ied"));
            push(format!("{base}ing"));
        } else {
            push(format!("{base}ed"));
            push(format!("{base}ing"));
        }

        candidates
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(base: &str) -> Vec<String> {
        SuffixInflections.candidates(base)
    }

    #[test]
    fn test_regular_verb() {
        let c = candidates("jump");
        assert!(c.contains(&"jumps".to_string()));
        assert!(c.contains(&"jumped".to_string()));
        assert!(c.contains(&"jumping".to_string()));
        assert!(!c.contains(&"jumpes".to_string()));
    }

    #[test]
    fn test_e_elision() {
        let c = candidates("bake");
        assert!(c.contains(&"bakes".to_string()));
        assert!(c.contains(&"baked".to_string()));
        assert!(c.contains(&"baking".to_string()));
        assert!(!c.contains(&"bakeing".to_string()));
    }

    #[test]
    fn test_consonant_y() {
        let c = candidates("carry");
        assert!(c.contains(&"carries".to_string()));
        assert!(c.contains(&"carried".to_string()));
        assert!(c.contains(&"carrying".to_string()));
        assert!(!c.contains(&"carryed".to_string()));
    }

    #[test]
    fn test_vowel_y_is_regular() {
        let c = candidates("play");
        assert!(c.contains(&"plays".to_string()));
        assert!(c.contains(&"played".to_string()));
        assert!(!c.contains(&"plaies".to_string()));
    }

    #[test]
    fn test_sibilant_plural() {
        for base in ["pass", "fox", "buzz", "match", "wash"] {
            let c = candidates(base);
            assert!(
                c.contains(&format!("{base}es")),
                "expected {base}es in {c:?}"
            );
        }
    }

    #[test]
    fn test_empty_base() {
        assert!(candidates("").is_empty());
    }

    #[test]
    fn test_no_duplicates() {
        for base in ["pass", "free", "try", "box"] {
            let c = candidates(base);
            let unique: std::collections::HashSet<_> = c.iter().collect();
            assert_eq!(unique.len(), c.len(), "duplicates for {base}: {c:?}");
        }
    }
}
