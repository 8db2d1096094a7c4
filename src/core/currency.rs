use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement currencies accepted by the LazerPay checkout widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    USD,
    /// Nigerian Naira
    NGN,
    /// UAE Dirham
    AED,
    /// Euro
    EUR,
    /// Pound Sterling
    GBP,
}

impl Currency {
    /// All currencies the widget can settle, in the order the processor lists them
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::NGN,
        Currency::AED,
        Currency::EUR,
        Currency::GBP,
    ];

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::NGN => "NGN",
            Currency::AED => "AED",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        2
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// Validates that an amount can be handed to the widget
    pub fn validate_amount(&self, amount: Decimal) -> Result<(), String> {
        if amount <= Decimal::ZERO {
            return Err(format!("{} amount must be greater than zero", self));
        }

        // Trailing zeros don't count: 10.500 is 10.50
        let places = amount.normalize().scale();
        if places > self.scale() {
            return Err(format!(
                "{} amounts must have at most {} decimal places, got {}",
                self,
                self.scale(),
                places
            ));
        }

        Ok(())
    }

    /// Formats an amount the way the widget expects it: plain digits, fixed scale
    pub fn format_amount(&self, amount: Decimal) -> String {
        format!("{:.width$}", self.round(amount), width = self.scale() as usize)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    /// Codes are matched exactly; the host platform stores them uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| format!("Unsupported currency: {}", s))
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
