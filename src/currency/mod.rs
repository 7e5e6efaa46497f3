//! Conversion of reported currencies into the base reporting currency.

use std::collections::HashMap;

/// Static conversion table mapping currency codes to base-currency rates.
///
/// Codes are stored upper-cased; lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        let base = base.into().trim().to_uppercase();
        let rates = rates
            .into_iter()
            .map(|(code, rate)| (code.trim().to_uppercase(), rate))
            .collect();
        Self { base, rates }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the multiplier converting one unit of `code` into the base
    /// currency. Absent or blank codes resolve as the base code; unknown
    /// codes pass through at 1.0, treated as already being base currency.
    pub fn multiplier(&self, code: Option<&str>) -> f64 {
        let code = code
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_uppercase)
            .unwrap_or_else(|| self.base.clone());
        if code == self.base {
            return 1.0;
        }
        match self.rates.get(&code) {
            Some(rate) => *rate,
            None => {
                tracing::debug!(%code, "unrecognized currency code, assuming base currency");
                1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RateTable {
        RateTable::new("inr", HashMap::from([("usd".to_string(), 83.0)]))
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = table();
        assert_eq!(table.multiplier(Some("usd")), table.multiplier(Some("USD")));
        assert_eq!(table.multiplier(Some("USD")), 83.0);
    }

    #[test]
    fn unknown_codes_pass_through_at_one() {
        assert_eq!(table().multiplier(Some("XYZ")), 1.0);
    }

    #[test]
    fn absent_and_blank_codes_resolve_as_base() {
        let table = table();
        assert_eq!(table.multiplier(None), 1.0);
        assert_eq!(table.multiplier(Some("  ")), 1.0);
        assert_eq!(table.base(), "INR");
    }
}
