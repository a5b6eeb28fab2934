// Currency name lookup
//
// Listing notes and filter forms use short currency names; rate tables
// are keyed by the canonical long names.

use std::collections::HashMap;

/// league -> canonical currency name -> chaos-equivalent rate.
pub type CurrencyRates = HashMap<String, HashMap<String, f64>>;

const SHORT_TO_LONG: &[(&str, &str)] = &[
    ("alt", "Orb of Alteration"),
    ("fuse", "Orb of Fusing"),
    ("alch", "Orb of Alchemy"),
    ("chaos", "Chaos Orb"),
    ("gcp", "Gemcutter's Prism"),
    ("exa", "Exalted Orb"),
    ("chrom", "Chromatic Orb"),
    ("jew", "Jeweller's Orb"),
    ("chance", "Orb of Chance"),
    ("chisel", "Cartographer's Chisel"),
    ("scour", "Orb of Scouring"),
    ("blessed", "Blessed Orb"),
    ("regret", "Orb of Regret"),
    ("regal", "Regal Orb"),
    ("divine", "Divine Orb"),
    ("vaal", "Vaal Orb"),
    ("mirror", "Mirror of Kalandra"),
];

/// Long name for a short alias, if it is one.
pub fn long_name(short: &str) -> Option<&'static str> {
    SHORT_TO_LONG
        .iter()
        .find(|(alias, _)| *alias == short)
        .map(|(_, long)| *long)
}

/// Target currency for a filter budget. Only the two names the filter
/// form offers as shorthand get expanded; anything else is compared as
/// written. The full alias table applies to listing notes only.
pub fn budget_name(name: &str) -> &str {
    match name {
        "chaos" => "Chaos Orb",
        "exa" => "Exalted Orb",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_names_expand_chaos_and_exa_only() {
        assert_eq!(budget_name("chaos"), "Chaos Orb");
        assert_eq!(budget_name("exa"), "Exalted Orb");
        assert_eq!(budget_name("divine"), "divine");
        assert_eq!(budget_name("Chaos Orb"), "Chaos Orb");
    }

    #[test]
    fn listing_aliases_cover_the_full_table() {
        assert_eq!(long_name("divine"), Some("Divine Orb"));
        assert_eq!(long_name("mirror"), Some("Mirror of Kalandra"));
        assert_eq!(long_name("Chaos Orb"), None);
    }
}
