//! The beer (product) record and its request payloads.

use super::ids::BeerId;
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const BEER_NAME_MAX: usize = 50;
pub const UPC_MAX: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl BeerStyle {
    pub const ALL: [BeerStyle; 10] = [
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Gose,
        BeerStyle::Porter,
        BeerStyle::Ale,
        BeerStyle::Wheat,
        BeerStyle::Ipa,
        BeerStyle::PaleAle,
        BeerStyle::Saison,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BeerStyle::Lager => "LAGER",
            BeerStyle::Pilsner => "PILSNER",
            BeerStyle::Stout => "STOUT",
            BeerStyle::Gose => "GOSE",
            BeerStyle::Porter => "PORTER",
            BeerStyle::Ale => "ALE",
            BeerStyle::Wheat => "WHEAT",
            BeerStyle::Ipa => "IPA",
            BeerStyle::PaleAle => "PALE_ALE",
            BeerStyle::Saison => "SAISON",
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the external spelling (`PALE_ALE`), ignoring case and surrounding whitespace.
impl FromStr for BeerStyle {
    type Err = ValidationErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BeerStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationErrors::single("beer_style", format!("unknown beer style '{wanted}'")))
    }
}

/// A stored beer.
///
/// `version` starts at 0 and is advanced by the store on every successful replace or
/// patch; `update_date` moves with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Beer {
    pub id: BeerId,
    pub version: u64,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: String,
    pub quantity_on_hand: Option<u32>,
    pub price: f64,
    pub created_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
}

/// Full beer payload, used both to create and to replace a record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BeerDraft {
    pub beer_name: String,
    pub beer_style: Option<BeerStyle>,
    pub upc: String,
    pub quantity_on_hand: Option<u32>,
    pub price: Option<f64>,
}

/// Sparse beer payload; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BeerPatch {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<String>,
    pub quantity_on_hand: Option<u32>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone)]
pub enum BeerUpdate {
    Replace(BeerDraft),
    Patch(BeerPatch),
}

impl Beer {
    pub fn from_draft(id: BeerId, draft: BeerDraft) -> Result<Self, ValidationErrors> {
        let now = Utc::now();
        let mut beer = Self {
            id,
            version: 0,
            beer_name: String::new(),
            beer_style: BeerStyle::Lager,
            upc: String::new(),
            quantity_on_hand: None,
            price: 0.0,
            created_date: now,
            update_date: now,
        };
        beer.replace_with(draft)?;
        Ok(beer)
    }

    /// Overwrites every mutable field from `draft`. Leaves `self` untouched on error.
    pub fn replace_with(&mut self, draft: BeerDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_present("beer_style", draft.beer_style.as_ref());
        errors.require_present("price", draft.price.as_ref());

        let candidate = Beer {
            beer_name: draft.beer_name,
            beer_style: draft.beer_style.unwrap_or(self.beer_style),
            upc: draft.upc,
            quantity_on_hand: draft.quantity_on_hand,
            price: draft.price.unwrap_or(self.price),
            ..self.clone()
        };
        errors.absorb(candidate.validate());
        errors.into_result()?;

        *self = candidate;
        Ok(())
    }

    /// Checks the record-level constraints.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("beer_name", &self.beer_name, BEER_NAME_MAX);
        errors.require_text("upc", &self.upc, UPC_MAX);
        errors.check(
            "price",
            self.price.is_finite() && self.price > 0.0,
            "must be greater than 0",
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BeerDraft {
        BeerDraft {
            beer_name: "Galaxy Cat".into(),
            beer_style: Some(BeerStyle::PaleAle),
            upc: "12356".into(),
            quantity_on_hand: Some(122),
            price: Some(12.99),
        }
    }

    #[test]
    fn style_parses_external_spelling() {
        assert_eq!("PALE_ALE".parse::<BeerStyle>().unwrap(), BeerStyle::PaleAle);
        assert_eq!(" ipa ".parse::<BeerStyle>().unwrap(), BeerStyle::Ipa);
        let err = "KVASS".parse::<BeerStyle>().unwrap_err();
        assert!(err.has_field("beer_style"));
    }

    #[test]
    fn from_draft_starts_at_version_zero() {
        let beer = Beer::from_draft(BeerId::new(), draft()).unwrap();
        assert_eq!(beer.version, 0);
        assert_eq!(beer.created_date, beer.update_date);
        assert_eq!(beer.quantity_on_hand, Some(122));
    }

    #[test]
    fn from_draft_reports_all_missing_fields() {
        let err = Beer::from_draft(
            BeerId::new(),
            BeerDraft {
                beer_name: "x".repeat(51),
                ..BeerDraft::default()
            },
        )
        .unwrap_err();
        for field in ["beer_name", "beer_style", "upc", "price"] {
            assert!(err.has_field(field), "missing violation for {field}");
        }
        assert_eq!(err.violations().len(), 4);
    }

    #[test]
    fn replace_with_rejects_without_partial_effect() {
        let mut beer = Beer::from_draft(BeerId::new(), draft()).unwrap();
        let before = beer.clone();
        let result = beer.replace_with(BeerDraft {
            price: Some(-1.0),
            ..draft()
        });
        assert!(result.unwrap_err().has_field("price"));
        assert_eq!(beer, before);
    }

    #[test]
    fn replace_with_clears_quantity_when_absent() {
        let mut beer = Beer::from_draft(BeerId::new(), draft()).unwrap();
        beer.replace_with(BeerDraft {
            quantity_on_hand: None,
            ..draft()
        })
        .unwrap();
        assert_eq!(beer.quantity_on_hand, None);
    }
}
