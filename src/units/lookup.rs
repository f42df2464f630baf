//! Quantity-kind matching
//!
//! Scores every quantity kind against free-text query terms and an optional
//! raw unit hint, and returns a ranked shortlist. Scoring is additive over
//! independent signals; entries scoring 0 are dropped.

use std::cmp::Reverse;

use super::model::QuantityKind;
use super::registry::UnitsRegistry;

const UNIT_COMPAT_BONUS: u32 = 4;
const ALIAS_EXACT: u32 = 8;
const ALIAS_PARTIAL: u32 = 4;
const TAG_EXACT: u32 = 5;
const TAG_PARTIAL: u32 = 2;
const LABEL_EXACT: u32 = 5;
const LABEL_PARTIAL: u32 = 2;
const KEY_EXACT: u32 = 4;
const KEY_PARTIAL: u32 = 1;
const SYMBOL_EXACT: u32 = 3;
const SYMBOL_PARTIAL: u32 = 1;

impl UnitsRegistry {
    /// Return `(quantity_kind_key, score)` pairs sorted by score descending.
    ///
    /// Ties keep document order (stable sort). A `limit` of 0 means
    /// unbounded; otherwise the shortlist is truncated to `limit` entries.
    /// The unit hint is normalized first and contributes a compatibility
    /// bonus when it matches an entry's default unit.
    pub fn lookup_quantity_kinds(
        &self,
        query: &str,
        raw_unit: Option<&str>,
        limit: usize,
    ) -> Vec<(String, u32)> {
        let text = query.to_lowercase();
        let norm_unit = self.normalize_unit(raw_unit);

        let mut results: Vec<(String, u32)> = self
            .quantity_kinds()
            .iter()
            .filter_map(|qk| {
                let mut score = score_text_signals(qk, &text);
                // Unit compatibility bonus. The entry's default unit is
                // normalized as well, so a symbol-valued default still
                // matches its canonical unit.
                if let Some(unit) = norm_unit {
                    if self.normalize_unit(Some(&qk.default_unit)) == Some(unit) {
                        score += UNIT_COMPAT_BONUS;
                    }
                }
                match score {
                    0 => None,
                    score => Some((qk.key.clone(), score)),
                }
            })
            .collect();

        results.sort_by_key(|&(_, score)| Reverse(score));
        if limit > 0 {
            results.truncate(limit);
        }
        results
    }
}

fn score_text_signals(qk: &QuantityKind, text: &str) -> u32 {
    let mut score = 0;

    // 1) alias matches (strong)
    for alias in &qk.aliases {
        let alias_lc = alias.to_lowercase();
        if alias_lc == text {
            score += ALIAS_EXACT;
        } else if alias_lc.contains(text) || text.contains(&alias_lc) {
            score += ALIAS_PARTIAL;
        }
    }

    // 2) tag matches (medium)
    for tag in &qk.tags {
        let tag_lc = tag.to_lowercase();
        if tag_lc == text {
            score += TAG_EXACT;
        } else if tag_lc.contains(text) || text.contains(&tag_lc) {
            score += TAG_PARTIAL;
        }
    }

    // 3) label / key / symbol substrings (light); substring checks only
    // apply to a non-empty query
    let label_lc = qk.label.to_lowercase();
    if label_lc == text {
        score += LABEL_EXACT;
    } else if !text.is_empty() && (label_lc.contains(text) || text.contains(&label_lc)) {
        score += LABEL_PARTIAL;
    }

    let key_lc = qk.key.to_lowercase();
    if key_lc == text {
        score += KEY_EXACT;
    } else if !text.is_empty() && (key_lc.contains(text) || text.contains(&key_lc)) {
        score += KEY_PARTIAL;
    }

    let symbol_lc = qk.symbol.to_lowercase();
    if symbol_lc == text {
        score += SYMBOL_EXACT;
    } else if !text.is_empty() && (symbol_lc.contains(text) || text.contains(&symbol_lc)) {
        score += SYMBOL_PARTIAL;
    }

    score
}
