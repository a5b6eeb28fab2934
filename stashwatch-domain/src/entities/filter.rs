// Filter entities
//
// FilterRecord is the persisted, user-authored shape: sentinel strings
// ("", "any"), stringly numerics, legacy affix keys. Filter is the
// normalized criteria object the matchers consume. Normalization runs
// once in from_record; the result is immutable afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_objects::{AffixBounds, LinksRule, RarityFilter, TriState};

static SOURCE_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(([A-Za-z ]+)\)\s*").expect("affix prefix pattern"));

static RANGE_BOTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\( ([0-9.]+) - ([0-9.]+) \)").expect("range pattern"));
static RANGE_NO_LOWER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(  - ([0-9.]+) \)").expect("range pattern"));
static RANGE_NO_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\( ([0-9.]+) -  \)").expect("range pattern"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("filter is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("filter field `{field}` has invalid value {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

/// Stored user input, exactly as persisted. Every criterion field uses
/// "" or "any" to mean unconstrained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterRecord {
    pub id: String,
    pub league: String,
    pub item: String,
    pub title: String,
    pub item_type: String,
    pub budget: String,
    pub currency: String,
    pub convert: bool,
    pub buyout: bool,
    pub clipboard: bool,
    pub active: bool,
    pub links: String,
    pub sockets_total: String,
    pub sockets_red: String,
    pub sockets_green: String,
    pub sockets_blue: String,
    pub sockets_white: String,
    pub corrupted: String,
    pub crafted: String,
    pub enchanted: String,
    pub identified: String,
    pub level: String,
    pub tier: String,
    pub experience: String,
    pub quality: String,
    pub rarity: String,
    pub armor: String,
    pub es: String,
    pub evasion: String,
    pub dps: String,
    pub pdps: String,
    pub edps: String,
    pub map_quantity: String,
    pub map_rarity: String,
    pub map_pack_size: String,
    pub affixes: HashMap<String, AffixBounds>,
    pub affixes_dis: Vec<String>,
    pub display_price: String,
    pub open_prefixes: String,
    pub open_suffixes: String,
}

impl Default for FilterRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            league: "any".to_string(),
            item: String::new(),
            title: String::new(),
            item_type: "any".to_string(),
            budget: String::new(),
            currency: "chaos".to_string(),
            convert: false,
            buyout: false,
            clipboard: false,
            active: true,
            links: "any".to_string(),
            sockets_total: String::new(),
            sockets_red: String::new(),
            sockets_green: String::new(),
            sockets_blue: String::new(),
            sockets_white: String::new(),
            corrupted: "any".to_string(),
            crafted: "any".to_string(),
            enchanted: "any".to_string(),
            identified: "any".to_string(),
            level: String::new(),
            tier: String::new(),
            experience: String::new(),
            quality: String::new(),
            rarity: "any".to_string(),
            armor: String::new(),
            es: String::new(),
            evasion: String::new(),
            dps: String::new(),
            pdps: String::new(),
            edps: String::new(),
            map_quantity: String::new(),
            map_rarity: String::new(),
            map_pack_size: String::new(),
            affixes: HashMap::new(),
            affixes_dis: Vec::new(),
            display_price: String::new(),
            open_prefixes: String::new(),
            open_suffixes: String::new(),
        }
    }
}

/// One normalized user rule. `None` / `TriState::Any` / `RarityFilter::Any`
/// mean unconstrained; no sentinel strings survive construction.
#[derive(Debug, Clone)]
pub struct Filter {
    pub id: String,
    pub title: String,
    pub active: bool,
    pub league: Option<String>,
    pub item_name: String,
    pub item_type: Option<String>,
    pub budget: Option<f64>,
    pub currency: String,
    pub convert: bool,
    pub buyout: bool,
    pub links: LinksRule,
    pub sockets_total: Option<u32>,
    pub sockets_red: Option<u32>,
    pub sockets_green: Option<u32>,
    pub sockets_blue: Option<u32>,
    pub sockets_white: Option<u32>,
    pub corrupted: TriState,
    pub crafted: TriState,
    pub enchanted: TriState,
    pub identified: TriState,
    pub level: Option<u32>,
    pub tier: Option<u32>,
    pub experience: Option<f64>,
    pub quality: Option<u32>,
    pub rarity: RarityFilter,
    pub armour: Option<u32>,
    pub es: Option<u32>,
    pub evasion: Option<u32>,
    pub dps: Option<f64>,
    pub pdps: Option<f64>,
    pub edps: Option<f64>,
    pub map_quantity: Option<f64>,
    pub map_rarity: Option<f64>,
    pub map_pack_size: Option<f64>,
    pub affixes: HashMap<String, AffixBounds>,
    pub affixes_display: Vec<String>,
    pub display_price: String,
    pub open_prefixes: String,
    pub open_suffixes: String,
}

impl Filter {
    pub fn from_record(record: FilterRecord) -> Result<Self, FilterError> {
        if record.league.is_empty() {
            return Err(FilterError::MissingField("league"));
        }
        let budget = opt_f64("budget", &record.budget)?.filter(|value| *value != 0.0);
        if budget.is_some() && record.currency.is_empty() {
            return Err(FilterError::MissingField("currency"));
        }
        let rarity = RarityFilter::parse(&record.rarity).ok_or(FilterError::InvalidValue {
            field: "rarity",
            value: record.rarity.clone(),
        })?;
        let links = LinksRule::parse(&record.links).ok_or(FilterError::InvalidValue {
            field: "links",
            value: record.links.clone(),
        })?;

        Ok(Self {
            id: record.id,
            title: record.title,
            active: record.active,
            league: match record.league.as_str() {
                "any" => None,
                league => Some(league.to_string()),
            },
            item_name: record.item,
            item_type: match record.item_type.as_str() {
                "" | "any" => None,
                category => Some(category.to_string()),
            },
            budget,
            currency: record.currency,
            convert: record.convert,
            buyout: record.buyout,
            links,
            sockets_total: opt_u32("sockets_total", &record.sockets_total)?,
            sockets_red: opt_u32("sockets_red", &record.sockets_red)?,
            sockets_green: opt_u32("sockets_green", &record.sockets_green)?,
            sockets_blue: opt_u32("sockets_blue", &record.sockets_blue)?,
            sockets_white: opt_u32("sockets_white", &record.sockets_white)?,
            corrupted: TriState::from(record.corrupted.as_str()),
            crafted: TriState::from(record.crafted.as_str()),
            enchanted: TriState::from(record.enchanted.as_str()),
            identified: TriState::from(record.identified.as_str()),
            level: opt_u32("level", &record.level)?,
            tier: opt_u32("tier", &record.tier)?,
            experience: opt_f64("experience", &record.experience)?,
            quality: opt_u32("quality", &record.quality)?,
            rarity,
            armour: opt_u32("armor", &record.armor)?,
            es: opt_u32("es", &record.es)?,
            evasion: opt_u32("evasion", &record.evasion)?,
            dps: opt_f64("dps", &record.dps)?,
            pdps: opt_f64("pdps", &record.pdps)?,
            edps: opt_f64("edps", &record.edps)?,
            map_quantity: opt_f64("map_quantity", &record.map_quantity)?,
            map_rarity: opt_f64("map_rarity", &record.map_rarity)?,
            map_pack_size: opt_f64("map_pack_size", &record.map_pack_size)?,
            affixes: Self::canonicalize_affixes(record.affixes),
            affixes_display: Self::canonicalize_display(record.affixes_dis),
            display_price: record.display_price,
            open_prefixes: record.open_prefixes,
            open_suffixes: record.open_suffixes,
        })
    }

    /// Rewrite legacy affix keys lacking a "(Source) " prefix to the
    /// "(Explicit) " form, normalizing their open-bound encodings on the
    /// way. Prefixed keys pass through untouched; a rewritten key that
    /// collides with an existing prefixed one overwrites it. Running this
    /// twice yields the same map as once.
    pub fn canonicalize_affixes(
        affixes: HashMap<String, AffixBounds>,
    ) -> HashMap<String, AffixBounds> {
        let mut canonical = HashMap::with_capacity(affixes.len());
        let mut legacy = Vec::new();
        for (key, bounds) in affixes {
            if SOURCE_PREFIX.is_match(&key) {
                canonical.insert(key, bounds);
            } else {
                legacy.push((key, bounds));
            }
        }
        for (key, mut bounds) in legacy {
            bounds.rewrite_open_sentinels();
            canonical.insert(format!("(Explicit) {key}"), bounds);
        }
        canonical
    }

    /// Same treatment for the display lines: unprefixed lines whose range
    /// text matches one of the authored shapes are rewritten to the
    /// markup-wrapped form and prefixed "(Explicit) "; unprefixed lines
    /// with no recognizable range are dropped.
    pub fn canonicalize_display(lines: Vec<String>) -> Vec<String> {
        let mut canonical = Vec::with_capacity(lines.len());
        for line in lines {
            if SOURCE_PREFIX.is_match(&line) {
                canonical.push(line);
            } else if RANGE_BOTH.is_match(&line) {
                let rewritten = RANGE_BOTH.replace(
                    &line,
                    "( <span class='value'>${1}</span> - <span class='value'>${2}</span> )",
                );
                canonical.push(format!("(Explicit) {rewritten}"));
            } else if RANGE_NO_LOWER.is_match(&line) {
                let rewritten = RANGE_NO_LOWER.replace(
                    &line,
                    "( <span class='value'>…</span> - <span class='value'>${1}</span> )",
                );
                canonical.push(format!("(Explicit) {rewritten}"));
            } else if RANGE_NO_UPPER.is_match(&line) {
                let rewritten = RANGE_NO_UPPER.replace(
                    &line,
                    "( <span class='value'>${1}</span> - <span class='value'>…</span> )",
                );
                canonical.push(format!("(Explicit) {rewritten}"));
            }
        }
        canonical
    }
}

/// Strip the "(Source) " prefix off a canonical affix name, leaving the
/// display template.
pub fn strip_source_prefix(name: &str) -> String {
    SOURCE_PREFIX.replace(name, "").into_owned()
}

fn opt_u32(field: &'static str, raw: &str) -> Result<Option<u32>, FilterError> {
    match raw.trim() {
        "" | "any" => Ok(None),
        value => value
            .parse()
            .map(Some)
            .map_err(|_| FilterError::InvalidValue {
                field,
                value: value.to_string(),
            }),
    }
}

fn opt_f64(field: &'static str, raw: &str) -> Result<Option<f64>, FilterError> {
    match raw.trim() {
        "" | "any" => Ok(None),
        value => value
            .parse()
            .map(Some)
            .map_err(|_| FilterError::InvalidValue {
                field,
                value: value.to_string(),
            }),
    }
}
