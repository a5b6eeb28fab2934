// Link requirement value object

use serde::{Deserialize, Serialize};

/// The filter's linked-socket requirement. The stored form keeps two
/// sentinel codes besides concrete counts: "0" means no meaningful link
/// group (under five linked) and "45" means four-or-five (under six).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinksRule {
    Any,
    Ungrouped,
    Exact(u8),
    UnderSix,
}

impl LinksRule {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "any" | "" => Some(LinksRule::Any),
            "0" => Some(LinksRule::Ungrouped),
            "45" => Some(LinksRule::UnderSix),
            other => other.parse::<u8>().ok().map(LinksRule::Exact),
        }
    }

    pub fn matches(&self, link_amount: u8) -> bool {
        match self {
            LinksRule::Any => true,
            LinksRule::Ungrouped => link_amount < 5,
            LinksRule::Exact(required) => link_amount == *required,
            LinksRule::UnderSix => link_amount < 6,
        }
    }
}
