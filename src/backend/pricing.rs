//! Jewelry price quotes.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metal {
    Gold,
    Silver,
    Platinum,
    Palladium,
}

impl Metal {
    pub const ALL: [Self; 4] = [Self::Gold, Self::Silver, Self::Platinum, Self::Palladium];

    /// Purity most pieces of this metal are made in.
    pub const fn standard_purity(self) -> Purity {
        match self {
            Self::Gold => Purity::Karat(18),
            Self::Silver => Purity::Millesimal(925),
            Self::Platinum | Self::Palladium => Purity::Millesimal(950),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Platinum => "Platinum",
            Self::Palladium => "Palladium",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|metal| metal.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Metal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precious metal content of an alloy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purity {
    /// Parts of 24, as used for gold.
    Karat(u8),
    /// Parts per thousand, e.g. sterling silver is 925.
    Millesimal(u16),
}

impl Purity {
    /// Fraction of pure metal in `(0, 1]`.
    pub fn fineness(self) -> Result<f64> {
        match self {
            Self::Karat(k @ 1..=24) => Ok(f64::from(k) / 24.0),
            Self::Karat(k) => bail!("Purity must be between 1 and 24 karats, got {k}"),
            Self::Millesimal(m @ 1..=1000) => Ok(f64::from(m) / 1000.0),
            Self::Millesimal(m) => bail!("Fineness must be between 1 and 1000, got {m}"),
        }
    }

    /// Parses `18k`, `18K`, `24kt` as karats and a bare number as fineness.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim().to_ascii_lowercase();
        let karats = input
            .strip_suffix("kt")
            .or_else(|| input.strip_suffix('k'));

        let purity = match karats {
            Some(k) => match k.trim().parse::<u8>() {
                Ok(k) => Self::Karat(k),
                Err(_) => bail!("Invalid karat value '{input}'"),
            },
            None => match input.parse::<u16>() {
                Ok(m) => Self::Millesimal(m),
                Err(_) => bail!("Invalid purity '{input}', use e.g. 18k or 925"),
            },
        };
        purity.fineness()?;
        Ok(purity)
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Karat(k) => write!(f, "{k}k"),
            Self::Millesimal(m) => write!(f, "{m}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    pub metal: Metal,
    pub purity: Purity,
    pub weight_grams: f64,
    /// Price of one gram of pure metal.
    pub price_per_gram: f64,
    pub labor_cost: f64,
    pub stones_cost: f64,
    pub markup_percent: f64,
}

/// Breakdown of a price, every amount rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub metal_value: f64,
    pub labor_cost: f64,
    pub stones_cost: f64,
    pub subtotal: f64,
    pub markup: f64,
    pub total: f64,
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        bail!("{field} must be a number");
    }
    if value < 0.0 {
        bail!("{field} cannot be negative");
    }
    Ok(value)
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Computes the price of a piece.
pub fn quote(input: &PriceInput) -> Result<Quote> {
    let fineness = input.purity.fineness()?;
    let weight = non_negative("Weight", input.weight_grams)?;
    let price_per_gram = non_negative("Price per gram", input.price_per_gram)?;
    let labor_cost = non_negative("Labor cost", input.labor_cost)?;
    let stones_cost = non_negative("Stones cost", input.stones_cost)?;
    let markup_percent = non_negative("Markup", input.markup_percent)?;

    let metal_value = weight * price_per_gram * fineness;
    let subtotal = metal_value + labor_cost + stones_cost;
    let markup = subtotal * markup_percent / 100.0;

    Ok(Quote {
        metal_value: round_cents(metal_value),
        labor_cost: round_cents(labor_cost),
        stones_cost: round_cents(stones_cost),
        subtotal: round_cents(subtotal),
        markup: round_cents(markup),
        total: round_cents(subtotal + markup),
    })
}

/// Parses a form amount; blank means zero, `,` is accepted as decimal mark.
pub fn parse_amount(field: &str, input: &str) -> Result<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }
    match input.replace(',', ".").parse::<f64>() {
        Ok(value) => non_negative(field, value),
        Err(_) => bail!("{field} must be a number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> PriceInput {
        PriceInput {
            metal: Metal::Gold,
            purity: Purity::Karat(18),
            weight_grams: 4.0,
            price_per_gram: 60.0,
            labor_cost: 50.0,
            stones_cost: 120.0,
            markup_percent: 30.0,
        }
    }

    #[test]
    fn gold_ring_quote() {
        let quote = quote(&ring()).unwrap();
        // 4 g * 60 * 18/24
        assert_eq!(quote.metal_value, 180.0);
        assert_eq!(quote.subtotal, 350.0);
        assert_eq!(quote.markup, 105.0);
        assert_eq!(quote.total, 455.0);
    }

    #[test]
    fn sterling_silver_rounds_to_cents() {
        let input = PriceInput {
            metal: Metal::Silver,
            purity: Metal::Silver.standard_purity(),
            weight_grams: 3.3,
            price_per_gram: 0.97,
            labor_cost: 0.0,
            stones_cost: 0.0,
            markup_percent: 0.0,
        };
        let quote = quote(&input).unwrap();
        // 3.3 * 0.97 * 0.925 = 2.960925
        assert_eq!(quote.metal_value, 2.96);
        assert_eq!(quote.total, 2.96);
        assert_eq!(quote.markup, 0.0);
    }

    #[test]
    fn rejects_negative_and_non_finite_inputs() {
        let negative = PriceInput {
            labor_cost: -1.0,
            ..ring()
        };
        assert_eq!(quote(&negative).unwrap_err().to_string(), "Labor cost cannot be negative");

        let nan = PriceInput {
            weight_grams: f64::NAN,
            ..ring()
        };
        assert_eq!(quote(&nan).unwrap_err().to_string(), "Weight must be a number");
    }

    #[test]
    fn rejects_out_of_range_purity() {
        let input = PriceInput {
            purity: Purity::Karat(25),
            ..ring()
        };
        assert!(quote(&input).is_err());
        assert!(Purity::Millesimal(0).fineness().is_err());
        assert_eq!(Purity::Millesimal(1000).fineness().unwrap(), 1.0);
    }

    #[test]
    fn parses_purity_notations() {
        assert_eq!(Purity::parse("18k").unwrap(), Purity::Karat(18));
        assert_eq!(Purity::parse(" 24KT ").unwrap(), Purity::Karat(24));
        assert_eq!(Purity::parse("925").unwrap(), Purity::Millesimal(925));
        assert!(Purity::parse("30k").is_err());
        assert!(Purity::parse("sterling").is_err());
        assert_eq!(Purity::parse(&Purity::Karat(14).to_string()).unwrap(), Purity::Karat(14));
    }

    #[test]
    fn parses_form_amounts() {
        assert_eq!(parse_amount("Weight", "").unwrap(), 0.0);
        assert_eq!(parse_amount("Weight", " 2,5 ").unwrap(), 2.5);
        assert!(parse_amount("Weight", "-3").is_err());
        assert!(parse_amount("Weight", "abc").is_err());
    }

    #[test]
    fn metal_names() {
        assert_eq!(Metal::from_name("platinum"), Some(Metal::Platinum));
        assert_eq!(Metal::from_name("bronze"), None);
        assert_eq!(Metal::Gold.standard_purity(), Purity::Karat(18));
    }
}
