//! Rate cards for time-of-day pricing
//!
//! Slot generation takes pricing as an injected pure function; [`RateCard`]
//! is the concrete carrier behind that function in this system. A card has a
//! base hourly rate plus optional bands (e.g. an evening peak rate). The
//! first band containing a slot's start minute wins.

use rust_decimal::Decimal;

use super::time_range::{Minutes, TimeRange};

/// Monetary amount. Decimal, never float: slot prices are quoted
/// individually and checkout totals must be exact sums of the quotes.
pub type Money = Decimal;

/// One time-of-day rate override.
#[derive(Debug, Clone)]
pub struct RateBand {
    pub applies: TimeRange,
    pub hourly_rate: Money,
}

/// Hourly pricing for a field.
#[derive(Debug, Clone)]
pub struct RateCard {
    pub base_hourly: Money,
    pub bands: Vec<RateBand>,
    /// Currency code (ISO 4217)
    pub currency: String,
}

impl RateCard {
    pub fn new(base_hourly: Money, currency: impl Into<String>) -> Self {
        Self {
            base_hourly,
            bands: Vec::new(),
            currency: currency.into(),
        }
    }

    /// Add a time-of-day override band. Bands are matched in insertion order.
    pub fn with_band(mut self, applies: TimeRange, hourly_rate: Money) -> Self {
        self.bands.push(RateBand {
            applies,
            hourly_rate,
        });
        self
    }

    /// Hourly rate in effect at a given minute of the day.
    pub fn hourly_rate_at(&self, minute: Minutes) -> Money {
        self.bands
            .iter()
            .find(|band| band.applies.contains_minute(minute))
            .map(|band| band.hourly_rate)
            .unwrap_or(self.base_hourly)
    }

    /// Price for one slot. The rate is taken at the slot's start; a
    /// truncated final slot is pro-rated by minutes.
    pub fn price_for(&self, range: &TimeRange) -> Money {
        let rate = self.hourly_rate_at(range.start());
        (rate * Decimal::from(range.duration()) / Decimal::from(60)).round_dp(2)
    }

    /// The injected pricing function consumed by slot generation.
    pub fn pricer(&self) -> impl Fn(&TimeRange) -> Money + '_ {
        move |range| self.price_for(range)
    }

    /// Format an amount with the card's currency, e.g. `"120.00 EUR"`.
    pub fn format_amount(&self, amount: Money) -> String {
        format!("{} {}", amount.round_dp(2), self.currency)
    }
}

// ── Tests ──────────────────────────────────────────────────────
