// Listed item entities
//
// Items are transient: the normalization collaborator produces one per
// evaluation call and the engine never retains them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single socket on an item. `attr` is the attribute letter the trade
/// API uses: S (red), D (green), I (blue), G (white).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Socket {
    pub group: u8,
    pub attr: String,
}

/// A listed item as handed to the engine. The `total_mods`, `pseudo_mods`,
/// `link_amount` and DPS fields start empty and are filled in by the
/// pipeline as the normalization stages run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub league: String,
    pub name: String,
    pub type_line: String,
    pub frame_type: u8,
    pub ilvl: u32,
    pub corrupted: bool,
    pub enchanted: bool,
    pub crafted: bool,
    pub identified: bool,
    #[serde(default)]
    pub sockets: Vec<Socket>,
    #[serde(default)]
    pub talisman_tier: Option<u32>,
    #[serde(default)]
    pub total_mods: Vec<String>,
    #[serde(default)]
    pub pseudo_mods: Vec<String>,
    #[serde(default)]
    pub link_amount: Option<u8>,
    #[serde(default)]
    pub dps: Option<f64>,
    #[serde(default)]
    pub pdps: Option<f64>,
    #[serde(default)]
    pub edps: Option<f64>,
}

/// Price breakdown computed by the normalization collaborator from the
/// listing note. `original_currency` is the short name as listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPrices {
    pub original_amount: Option<f64>,
    pub original_currency: Option<String>,
    pub converted_price: Option<f64>,
    pub converted_price_chaos: Option<f64>,
}

/// Parsed numeric mod values keyed by canonical affix name.
///
/// `mods` holds the raw value lists (one entry for flat mods, two for
/// "adds X to Y" ranges). `total_mods` and `pseudo_mods` hold the single
/// aggregated value that gets substituted back into display templates.
#[derive(Debug, Clone, Default)]
pub struct ParsedMods {
    pub mods: HashMap<String, Vec<f64>>,
    pub total_mods: HashMap<String, f64>,
    pub pseudo_mods: HashMap<String, f64>,
}

/// DPS family derived from weapon damage properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpsValues {
    pub dps: f64,
    pub pdps: f64,
    pub edps: f64,
}

/// Socket counts per colour.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocketColours {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
    pub white: u32,
}

/// Largest linked group size plus per-colour socket counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkSummary {
    pub link_amount: u8,
    pub colour_count: SocketColours,
}

/// The enriched record the formatting collaborator produces for a match.
/// The collaborator may veto the match through `passed`; the pipeline's
/// outcome is this flag, not the property stage result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedItem {
    pub name: String,
    pub type_line: String,
    pub league: String,
    pub frame_type: u8,
    #[serde(default)]
    pub display_price: Option<String>,
    #[serde(default)]
    pub total_mods: Vec<String>,
    #[serde(default)]
    pub pseudo_mods: Vec<String>,
    #[serde(default)]
    pub open_prefixes: String,
    #[serde(default)]
    pub open_suffixes: String,
    pub passed: bool,
}
