// Property and socket matching

use std::collections::HashMap;

use crate::entities::{Filter, Item, LinkSummary};
use crate::value_objects::FRAME_GEM;

pub struct PropertyMatcher;

impl PropertyMatcher {
    /// Scalar property stage: a conjunction of "unconstrained or filter
    /// minimum <= parsed value" rules. A constrained criterion whose
    /// property is missing from the parsed map fails.
    pub fn matches(item: &Item, filter: &Filter, properties: &HashMap<String, String>) -> bool {
        meets_int(filter.evasion, properties.get("Evasion Rating"))
            && meets_int(filter.es, properties.get("Energy Shield"))
            && meets_int(filter.armour, properties.get("Armour"))
            && meets_float(filter.dps, properties.get("DPS"))
            && meets_float(filter.pdps, properties.get("pDPS"))
            && meets_float(filter.edps, properties.get("eDPS"))
            && meets_float(filter.map_pack_size, properties.get("Monster Pack Size"))
            && meets_float(filter.map_quantity, properties.get("Item Quantity"))
            && meets_float(filter.map_rarity, properties.get("Item Rarity"))
            && quality_ok(filter.quality, properties.get("Quality"))
            && tier_ok(filter.tier, properties.get("Map Tier"), item.talisman_tier)
            && meets_float(filter.experience, properties.get("Experience"))
            && gem_level_ok(item, filter.level, properties.get("Level"))
    }

    /// Socket and link stage, run only after the scalar stage passed.
    pub fn matches_sockets(filter: &Filter, links: &LinkSummary) -> bool {
        filter.links.matches(links.link_amount)
            && colour_ok(filter.sockets_red, links.colour_count.red)
            && colour_ok(filter.sockets_green, links.colour_count.green)
            && colour_ok(filter.sockets_blue, links.colour_count.blue)
            && colour_ok(filter.sockets_white, links.colour_count.white)
    }
}

fn meets_int(required: Option<u32>, parsed: Option<&String>) -> bool {
    let Some(required) = required else { return true };
    match parsed.and_then(|raw| lead_int(raw)) {
        Some(value) => i64::from(required) <= value,
        None => false,
    }
}

fn meets_float(required: Option<f64>, parsed: Option<&String>) -> bool {
    let Some(required) = required else { return true };
    match parsed.and_then(|raw| lead_float(raw)) {
        Some(value) => required <= value,
        None => false,
    }
}

fn quality_ok(required: Option<u32>, parsed: Option<&String>) -> bool {
    let Some(required) = required else { return true };
    let Some(raw) = parsed else { return false };
    let stripped: String = raw.chars().filter(|ch| *ch != '+' && *ch != '%').collect();
    match lead_int(&stripped) {
        Some(value) => i64::from(required) <= value,
        None => false,
    }
}

// The talisman alternative still requires a map-tier property to exist;
// that is how the original records behaved and downstream filters rely
// on it.
fn tier_ok(required: Option<u32>, map_tier: Option<&String>, talisman_tier: Option<u32>) -> bool {
    let Some(required) = required else { return true };
    let Some(raw) = map_tier else { return false };
    let matches_map = lead_int(raw) == Some(i64::from(required));
    matches_map || talisman_tier == Some(required)
}

// Non-gems already had their level checked against item level in the
// identity stage; here only gems are constrained, via the parsed
// "Level" property.
fn gem_level_ok(item: &Item, required: Option<u32>, level: Option<&String>) -> bool {
    if item.frame_type != FRAME_GEM {
        return true;
    }
    let Some(required) = required else { return true };
    match level.and_then(|raw| lead_int(raw)) {
        Some(value) => i64::from(required) <= value,
        None => false,
    }
}

fn colour_ok(required: Option<u32>, count: u32) -> bool {
    match required {
        Some(required) => count >= required,
        None => true,
    }
}

/// Leading-integer parse: sign plus digits, ignoring any augmented-value
/// suffix ("150 (augmented)" parses as 150).
fn lead_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let mut end = 0;
    for (index, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || (index == 0 && (ch == '-' || ch == '+')) {
            end = index + ch.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].trim_start_matches('+').parse().ok()
}

/// Leading-float counterpart.
fn lead_float(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut end = 0;
    for (index, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || ch == '.' || (index == 0 && (ch == '-' || ch == '+')) {
            end = index + ch.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].trim_start_matches('+').parse().ok()
}
