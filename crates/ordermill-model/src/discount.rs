//! Quantity-tiered discount ladder.

/// One ladder entry: a raw `"lower-upper"` range key and its rate.
///
/// The key encodes a half-open interval `[lower, upper)`. The key is kept
/// as the raw string because an unparseable key is meaningful: it matches
/// any quantity (see [`DiscountLadder::rate_for`]).
#[derive(Debug, Clone, PartialEq)]
pub struct LadderRule {
    pub range: String,
    pub rate: f64,
}

impl LadderRule {
    pub fn new(range: impl Into<String>, rate: f64) -> Self {
        Self {
            range: range.into(),
            rate,
        }
    }
}

/// Ordered quantity-range to rate ladder, loaded once at startup.
///
/// Entry order is the source sheet's row order and determines lookup
/// precedence.
#[derive(Debug, Clone, Default)]
pub struct DiscountLadder {
    rules: Vec<LadderRule>,
}

impl DiscountLadder {
    pub fn new(rules: Vec<LadderRule>) -> Self {
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[LadderRule] {
        &self.rules
    }

    /// Look up the discount rate for a quantity.
    ///
    /// Rules are tried in stored order; the first hit wins. A rule whose
    /// key parses as `lower-upper` hits when `lower <= quantity < upper`.
    /// A rule whose key does not parse hits unconditionally, for any
    /// quantity, so a malformed entry shadows every rule after it.
    /// Returns `None` when no rule hits.
    pub fn rate_for(&self, quantity: i64) -> Option<f64> {
        for rule in &self.rules {
            match parse_range(&rule.range) {
                Some((lower, upper)) => {
                    if lower <= quantity && quantity < upper {
                        return Some(rule.rate);
                    }
                }
                None => return Some(rule.rate),
            }
        }
        None
    }
}

/// Split a `"lower-upper"` key into integer bounds.
///
/// Segments past the second are ignored, matching the source sheet
/// convention of only the first two counting.
fn parse_range(key: &str) -> Option<(i64, i64)> {
    let mut parts = key.split('-');
    let lower = parts.next()?.trim().parse().ok()?;
    let upper = parts.next()?.trim().parse().ok()?;
    Some((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(pairs: &[(&str, f64)]) -> DiscountLadder {
        DiscountLadder::new(
            pairs
                .iter()
                .map(|(range, rate)| LadderRule::new(*range, *rate))
                .collect(),
        )
    }

    #[test]
    fn quantity_hits_its_tier() {
        let ladder = ladder(&[("0-10", 0.05), ("10-20", 0.10)]);
        assert_eq!(ladder.rate_for(5), Some(0.05));
        assert_eq!(ladder.rate_for(15), Some(0.10));
    }

    #[test]
    fn bounds_are_half_open() {
        let ladder = ladder(&[("0-10", 0.05), ("10-20", 0.10)]);
        assert_eq!(ladder.rate_for(0), Some(0.05));
        assert_eq!(ladder.rate_for(10), Some(0.10));
        assert_eq!(ladder.rate_for(20), None);
    }

    #[test]
    fn no_match_and_no_fallback_yields_none() {
        let ladder = ladder(&[("0-10", 0.05), ("10-20", 0.10)]);
        assert_eq!(ladder.rate_for(25), None);
    }

    #[test]
    fn malformed_key_matches_any_quantity() {
        let ladder = ladder(&[("bad", 0.99), ("0-10", 0.05)]);
        assert_eq!(ladder.rate_for(5), Some(0.99));
        assert_eq!(ladder.rate_for(500), Some(0.99));
    }

    #[test]
    fn earlier_valid_tier_beats_later_malformed_entry() {
        let ladder = ladder(&[("0-10", 0.05), ("bad", 0.99)]);
        assert_eq!(ladder.rate_for(5), Some(0.05));
        assert_eq!(ladder.rate_for(50), Some(0.99));
    }

    #[test]
    fn extra_segments_beyond_the_second_are_ignored() {
        let ladder = ladder(&[("10-20-30", 0.07)]);
        assert_eq!(ladder.rate_for(15), Some(0.07));
        assert_eq!(ladder.rate_for(25), None);
    }

    #[test]
    fn empty_ladder_never_matches() {
        let ladder = DiscountLadder::default();
        assert!(ladder.is_empty());
        assert_eq!(ladder.rate_for(5), None);
    }
}
