// Budget vs price resolution

use crate::entities::{Filter, ItemPrices, RuntimeConfig};
use crate::value_objects::currency;
use crate::value_objects::CurrencyRates;

pub struct PriceEvaluator;

impl PriceEvaluator {
    /// An item is within budget if any of the following holds:
    /// - no budget is set;
    /// - the filter converts currencies, a converted price exists, and
    ///   the chaos-equivalent price is at most the budget expressed in
    ///   the target currency's chaos rate;
    /// - no converted price exists and the filter does not insist on a
    ///   buyout (absent pricing data never excludes an item);
    /// - conversion is off and the listing's currency is the target
    ///   currency with an amount at most the budget.
    pub fn matches(
        filter: &Filter,
        prices: &ItemPrices,
        rates: &CurrencyRates,
        config: &RuntimeConfig,
    ) -> bool {
        let Some(budget) = filter.budget else {
            return true;
        };
        let target = currency::budget_name(&filter.currency);

        if filter.convert && prices.converted_price.is_some() {
            let rate = filter
                .league
                .as_deref()
                .map(|league| league_key(league, config))
                .and_then(|league| rates.get(&league))
                .and_then(|table| table.get(target).copied());
            if let (Some(chaos), Some(rate)) = (prices.converted_price_chaos, rate) {
                if chaos <= budget * rate {
                    return true;
                }
            }
        }

        if prices.converted_price.is_none() && !filter.buyout {
            return true;
        }

        if !filter.convert {
            let original = prices
                .original_currency
                .as_deref()
                .and_then(currency::long_name);
            if original == Some(target) {
                if let Some(amount) = prices.original_amount {
                    if amount <= budget {
                        return true;
                    }
                }
            }
        }

        false
    }
}

/// Rate tables for the beta environment are keyed under a prefixed
/// league name.
fn league_key(league: &str, config: &RuntimeConfig) -> String {
    if config.use_beta {
        format!("beta-{league}")
    } else {
        league.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::FilterRecord;
    use std::collections::HashMap;

    fn make_filter(record: FilterRecord) -> Filter {
        Filter::from_record(record).unwrap()
    }

    fn rates_for(league: &str, name: &str, rate: f64) -> CurrencyRates {
        let mut table = HashMap::new();
        table.insert(name.to_string(), rate);
        let mut rates = HashMap::new();
        rates.insert(league.to_string(), table);
        rates
    }

    fn priced(amount: f64, short_currency: &str, chaos: f64) -> ItemPrices {
        ItemPrices {
            original_amount: Some(amount),
            original_currency: Some(short_currency.to_string()),
            converted_price: Some(chaos),
            converted_price_chaos: Some(chaos),
        }
    }

    #[test]
    fn no_budget_is_unconstrained() {
        let filter = make_filter(FilterRecord::default());
        let config = RuntimeConfig::default();
        assert!(PriceEvaluator::matches(
            &filter,
            &priced(999.0, "exa", 90_000.0),
            &CurrencyRates::new(),
            &config
        ));
    }

    #[test]
    fn exact_currency_match_without_conversion() {
        let filter = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "10".to_string(),
            currency: "chaos".to_string(),
            convert: false,
            ..FilterRecord::default()
        });
        let config = RuntimeConfig::default();
        // Priced at exactly the budget in chaos: pass.
        assert!(PriceEvaluator::matches(
            &filter,
            &priced(10.0, "chaos", 10.0),
            &CurrencyRates::new(),
            &config
        ));
        // Same numeric amount in a different currency: no conversion, fail.
        assert!(!PriceEvaluator::matches(
            &filter,
            &priced(10.0, "exa", 900.0),
            &CurrencyRates::new(),
            &config
        ));
        // Over budget in the right currency: fail.
        assert!(!PriceEvaluator::matches(
            &filter,
            &priced(11.0, "chaos", 11.0),
            &CurrencyRates::new(),
            &config
        ));
    }

    #[test]
    fn only_chaos_and_exa_budgets_expand_to_listing_currencies() {
        let config = RuntimeConfig::default();

        // A "divine" budget stays short-form while the listing currency
        // expands to "Divine Orb", so the exact-currency path never
        // matches, even under budget.
        let divine = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "5".to_string(),
            currency: "divine".to_string(),
            convert: false,
            ..FilterRecord::default()
        });
        assert!(!PriceEvaluator::matches(
            &divine,
            &priced(3.0, "divine", 600.0),
            &CurrencyRates::new(),
            &config
        ));

        // The exa shorthand does expand.
        let exa = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "5".to_string(),
            currency: "exa".to_string(),
            convert: false,
            ..FilterRecord::default()
        });
        assert!(PriceEvaluator::matches(
            &exa,
            &priced(3.0, "exa", 270.0),
            &CurrencyRates::new(),
            &config
        ));
    }

    #[test]
    fn converted_comparison_uses_the_league_rate() {
        let filter = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "2".to_string(),
            currency: "exa".to_string(),
            convert: true,
            buyout: true,
            ..FilterRecord::default()
        });
        let config = RuntimeConfig::default();
        let rates = rates_for("Standard", "Exalted Orb", 90.0);

        // 150 chaos against a 2 exa budget at 90 chaos/exa: pass.
        assert!(PriceEvaluator::matches(&filter, &priced(150.0, "chaos", 150.0), &rates, &config));
        // 200 chaos is over 180: fail.
        assert!(!PriceEvaluator::matches(&filter, &priced(200.0, "chaos", 200.0), &rates, &config));
    }

    #[test]
    fn beta_mode_prefixes_the_rate_league() {
        let filter = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "2".to_string(),
            currency: "exa".to_string(),
            convert: true,
            buyout: true,
            ..FilterRecord::default()
        });
        let config = RuntimeConfig { use_beta: true };
        let beta_rates = rates_for("beta-Standard", "Exalted Orb", 90.0);
        let plain_rates = rates_for("Standard", "Exalted Orb", 90.0);

        assert!(PriceEvaluator::matches(&filter, &priced(150.0, "chaos", 150.0), &beta_rates, &config));
        assert!(!PriceEvaluator::matches(&filter, &priced(150.0, "chaos", 150.0), &plain_rates, &config));
    }

    #[test]
    fn unpriced_items_pass_unless_buyout_is_required() {
        let relaxed = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "10".to_string(),
            currency: "chaos".to_string(),
            convert: true,
            buyout: false,
            ..FilterRecord::default()
        });
        let strict = make_filter(FilterRecord {
            league: "Standard".to_string(),
            budget: "10".to_string(),
            currency: "chaos".to_string(),
            convert: true,
            buyout: true,
            ..FilterRecord::default()
        });
        let config = RuntimeConfig::default();
        let unpriced = ItemPrices::default();

        assert!(PriceEvaluator::matches(&relaxed, &unpriced, &CurrencyRates::new(), &config));
        assert!(!PriceEvaluator::matches(&strict, &unpriced, &CurrencyRates::new(), &config));
    }
}
