// Evaluation pipeline
//
// The ordered, short-circuiting sequence of checks: identity/category,
// price, mod extraction, affix match, property extraction (with DPS
// derivation), property+socket match, result formatting. Each stage
// gates the next; any failure is a uniform no-match. The legacy nested
// callback chain is flattened into sequential awaits, stage order
// preserved exactly.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use stashwatch_domain::{
    strip_source_prefix, AffixMatcher, CategoryIndex, CurrencyRates, Filter, FormattedItem, Item,
    ItemNormalizer, PriceEvaluator, PropertyMatcher, RuntimeConfig, FRAME_GEM,
};

use crate::error::EvalError;

/// Marker the trade API embeds in some name fields.
const NAME_MARKER: &str = "<<set:MS>><<set:M>><<set:S>>";

pub struct EvaluationPipeline {
    normalizer: Arc<dyn ItemNormalizer>,
    categories: Arc<dyn CategoryIndex>,
}

impl EvaluationPipeline {
    pub fn new(normalizer: Arc<dyn ItemNormalizer>, categories: Arc<dyn CategoryIndex>) -> Self {
        Self {
            normalizer,
            categories,
        }
    }

    /// Evaluate one (item, filter) pair. `Ok(None)` is the uniform
    /// no-match outcome; errors are collaborator failures and fail this
    /// evaluation only.
    pub async fn evaluate(
        &self,
        item: &Item,
        filter: &Filter,
        rates: &CurrencyRates,
        config: &RuntimeConfig,
    ) -> Result<Option<FormattedItem>, EvalError> {
        let mut item = item.clone();
        item.name = item.name.replace(NAME_MARKER, "");
        item.type_line = item.type_line.replace(NAME_MARKER, "");
        let display_name = if item.name.is_empty() {
            item.type_line.clone()
        } else {
            item.name.clone()
        };

        if !self.matches_identity(&item, filter).await? {
            debug!("{}: failed identity stage", display_name);
            return Ok(None);
        }

        let prices = self.normalizer.compute_price(&item, rates).await?;
        if !PriceEvaluator::matches(filter, &prices, rates, config) {
            debug!("{}: not within budget", display_name);
            return Ok(None);
        }

        let parsed_mods = self.normalizer.normalize_mods(&item).await?;
        item.total_mods = keep_known_mods(&parsed_mods.total_mods, filter);
        item.pseudo_mods = keep_known_mods(&parsed_mods.pseudo_mods, filter);

        if !AffixMatcher::matches(&filter.affixes, &parsed_mods) {
            debug!("{}: not the right mods", display_name);
            return Ok(None);
        }

        let (adjusted, mut properties) = self.normalizer.normalize_properties(&item).await?;
        let mut item = adjusted;
        // Whenever an attack speed property exists the DPS family is
        // recomputed and refreshed, overwriting any prior values.
        if properties.contains_key("Attacks per Second") {
            let dps = self.normalizer.compute_dps(&properties).await?;
            properties.insert("DPS".to_string(), format_value(dps.dps));
            properties.insert("pDPS".to_string(), format_value(dps.pdps));
            properties.insert("eDPS".to_string(), format_value(dps.edps));
            item.dps = Some(dps.dps);
            item.pdps = Some(dps.pdps);
            item.edps = Some(dps.edps);
        }

        if !PropertyMatcher::matches(&item, filter, &properties) {
            debug!("{}: not the right properties", display_name);
            return Ok(None);
        }
        let links = self.normalizer.resolve_links_and_colours(&item).await?;
        item.link_amount = Some(links.link_amount);
        if !PropertyMatcher::matches_sockets(filter, &links) {
            debug!("{}: not the right sockets", display_name);
            return Ok(None);
        }

        let formatted = self
            .normalizer
            .format_result(
                &item,
                &display_name,
                &prices,
                &filter.open_prefixes,
                &filter.open_suffixes,
            )
            .await?;
        if formatted.passed {
            Ok(Some(formatted))
        } else {
            Ok(None)
        }
    }

    async fn matches_identity(&self, item: &Item, filter: &Filter) -> Result<bool, EvalError> {
        if let Some(league) = &filter.league {
            if item.league != *league {
                return Ok(false);
            }
        }
        if !filter.item_name.is_empty() {
            let wanted = filter.item_name.to_lowercase();
            if item.name.to_lowercase() != wanted && item.type_line.to_lowercase() != wanted {
                return Ok(false);
            }
        }
        if let Some(category) = &filter.item_type {
            let types = self.categories.lookup_category_types(category).await?;
            if !types.iter().any(|name| *name == item.type_line) {
                return Ok(false);
            }
        }
        if let Some(total) = filter.sockets_total {
            if (item.sockets.len() as u32) < total {
                return Ok(false);
            }
        }
        if !filter.corrupted.matches(item.corrupted)
            || !filter.enchanted.matches(item.enchanted)
            || !filter.crafted.matches(item.crafted)
            || !filter.identified.matches(item.identified)
        {
            return Ok(false);
        }
        // Gems carry their level as a property, checked later.
        if let Some(level) = filter.level {
            if item.frame_type != FRAME_GEM && level > item.ilvl {
                return Ok(false);
            }
        }
        Ok(filter.rarity.matches(item.frame_type))
    }
}

/// Keep only the aggregated mods the filter asks about, substituting the
/// parsed value into the first template placeholder.
fn keep_known_mods(parsed: &HashMap<String, f64>, filter: &Filter) -> Vec<String> {
    let mut kept = Vec::new();
    for (name, value) in parsed {
        if filter.affixes.contains_key(name) {
            kept.push(strip_source_prefix(name).replacen('#', &format_value(*value), 1));
        }
    }
    kept
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
