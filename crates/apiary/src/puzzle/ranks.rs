//! The rank ladder: named progress tiers and their score thresholds.

use indexmap::IndexMap;

/// Rank keys and the fraction of `max_score` each tier requires, in
/// ascending order. The lowest tier is always reachable at 0; the top
/// tier requires the full maximum.
pub const RANK_LADDER: &[(&str, f64)] = &[
    ("beginner", 0.0),
    ("goodStart", 0.02),
    ("movingUp", 0.05),
    ("good", 0.08),
    ("solid", 0.15),
    ("nice", 0.25),
    ("great", 0.40),
    ("amazing", 0.50),
    ("genius", 0.70),
    ("queenBee", 1.0),
];

/// Per-rank thresholds for a puzzle: `floor(max_score × fraction)`,
/// emitted in ladder order.
pub fn rank_thresholds(max_score: u32) -> IndexMap<String, u32> {
    RANK_LADDER
        .iter()
        .map(|&(key, fraction)| {
            let threshold = (f64::from(max_score) * fraction).floor() as u32;
            (key.to_string(), threshold)
        })
        .collect()
}

/// The highest rank a score has reached.
pub fn rank_for_score(score: u32, thresholds: &IndexMap<String, u32>) -> &'static str {
    let mut current = RANK_LADDER[0].0;
    for &(key, _) in RANK_LADDER {
        if let Some(&threshold) = thresholds.get(key) {
            if score >= threshold {
                current = key;
            }
        }
    }
    current
}

/// Human-readable label for a rank key ("goodStart" → "Good Start").
pub fn rank_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 2);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            label.push(' ');
            label.push(c);
        } else if i == 0 {
            label.push(c.to_ascii_uppercase());
        } else {
            label.push(c);
        }
    }
    label
}
