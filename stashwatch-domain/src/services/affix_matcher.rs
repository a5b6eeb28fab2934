// Affix criteria matching

use std::collections::HashMap;

use crate::entities::ParsedMods;
use crate::value_objects::AffixBounds;

pub struct AffixMatcher;

impl AffixMatcher {
    /// Every affix criterion is required: the item passes only if each
    /// one is individually satisfied. A mod with a single parsed value
    /// must sit inside [min, max]; a two-value range is judged by its
    /// arithmetic mean; any other present shape satisfies the criterion
    /// by presence alone. A missing mod, or an unparseable bound
    /// literal, fails that criterion.
    pub fn matches(affixes: &HashMap<String, AffixBounds>, parsed: &ParsedMods) -> bool {
        let mut satisfied = 0;
        for (affix, bounds) in affixes {
            let Some(values) = parsed.mods.get(affix) else {
                continue;
            };
            let Ok((min, max)) = bounds.resolve() else {
                continue;
            };
            match values.as_slice() {
                [value] => {
                    if min <= *value && *value <= max {
                        satisfied += 1;
                    }
                }
                [lower, upper] => {
                    let average = (lower + upper) / 2.0;
                    if min <= average && average <= max {
                        satisfied += 1;
                    }
                }
                _ => satisfied += 1,
            }
        }
        satisfied == affixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{BoundLiteral, OPEN_BOUND};

    fn criteria(entries: &[(&str, AffixBounds)]) -> HashMap<String, AffixBounds> {
        entries
            .iter()
            .map(|(key, bounds)| (key.to_string(), bounds.clone()))
            .collect()
    }

    fn parsed(entries: &[(&str, &[f64])]) -> ParsedMods {
        ParsedMods {
            mods: entries
                .iter()
                .map(|(key, values)| (key.to_string(), values.to_vec()))
                .collect(),
            ..ParsedMods::default()
        }
    }

    const LIFE: &str = "(Explicit) # to maximum Life";

    #[test]
    fn single_value_bounds_are_inclusive() {
        let affixes = criteria(&[(LIFE, AffixBounds::new(20.0, 35.0))]);

        assert!(AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[20.0])])));
        assert!(AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[35.0])])));
        assert!(!AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[19.9])])));
        assert!(!AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[35.1])])));
    }

    #[test]
    fn two_value_mods_are_judged_by_their_mean() {
        let affixes = criteria(&[(LIFE, AffixBounds::new(14.0, 16.0))]);

        // Mod range [10, 20]: neither endpoint is in bounds, the mean is.
        assert!(AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[10.0, 20.0])])));
        assert!(!AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[10.0, 40.0])])));
    }

    #[test]
    fn open_upper_bound_only_constrains_below() {
        let affixes = criteria(&[(LIFE, AffixBounds::new(20.0, OPEN_BOUND))]);

        assert!(!AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[15.0])])));
        assert!(AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[25.0])])));
    }

    #[test]
    fn missing_mod_fails_the_criterion() {
        let affixes = criteria(&[(LIFE, AffixBounds::new(OPEN_BOUND, OPEN_BOUND))]);
        assert!(!AffixMatcher::matches(&affixes, &parsed(&[])));
    }

    #[test]
    fn other_value_shapes_pass_on_presence() {
        let affixes = criteria(&[(LIFE, AffixBounds::new(900.0, 999.0))]);
        assert!(AffixMatcher::matches(&affixes, &parsed(&[(LIFE, &[1.0, 2.0, 3.0])])));
    }

    #[test]
    fn unparseable_bound_fails_only_that_criterion() {
        let resists = "(Pseudo) +#% total Elemental Resistance";
        let affixes = criteria(&[
            (LIFE, AffixBounds::new(BoundLiteral::from("lots"), BoundLiteral::from(OPEN_BOUND))),
            (resists, AffixBounds::new(50.0, OPEN_BOUND)),
        ]);
        // Both mods present and the second criterion satisfied, but the
        // first bound is garbage, so the conjunction fails.
        assert!(!AffixMatcher::matches(
            &affixes,
            &parsed(&[(LIFE, &[80.0]), (resists, &[90.0])])
        ));
    }

    #[test]
    fn empty_criteria_match_anything() {
        assert!(AffixMatcher::matches(&HashMap::new(), &parsed(&[])));
    }
}
