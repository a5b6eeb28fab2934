use async_trait::async_trait;
use std::collections::HashMap;

use crate::entities::{DpsValues, FormattedItem, Item, ItemPrices, LinkSummary, ParsedMods};
use crate::value_objects::CurrencyRates;

/// The item normalization collaborator. Parsing raw item text, price
/// computation and result rendering all live behind this trait; the
/// engine only sequences the calls. Every method may do variable-latency
/// work, so all of them are async.
#[async_trait]
pub trait ItemNormalizer: Send + Sync {
    /// Parsed numeric mod values keyed by canonical affix name.
    async fn normalize_mods(&self, item: &Item) -> anyhow::Result<ParsedMods>;

    /// Parsed display properties keyed by name, plus the adjusted item.
    async fn normalize_properties(
        &self,
        item: &Item,
    ) -> anyhow::Result<(Item, HashMap<String, String>)>;

    /// DPS family derived from the weapon damage properties.
    async fn compute_dps(&self, properties: &HashMap<String, String>)
        -> anyhow::Result<DpsValues>;

    /// Largest linked group and per-colour socket counts.
    async fn resolve_links_and_colours(&self, item: &Item) -> anyhow::Result<LinkSummary>;

    /// Price breakdown computed from the listing, in source currency and
    /// converted through the rate table.
    async fn compute_price(&self, item: &Item, rates: &CurrencyRates)
        -> anyhow::Result<ItemPrices>;

    /// Render the final enriched record. The returned `passed` flag is
    /// authoritative: a false here vetoes the match.
    async fn format_result(
        &self,
        item: &Item,
        display_name: &str,
        prices: &ItemPrices,
        open_prefixes: &str,
        open_suffixes: &str,
    ) -> anyhow::Result<FormattedItem>;
}
