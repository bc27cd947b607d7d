//! Merge table for beer patches.

use crate::merge::{self, overwrite, overwrite_optional, overwrite_text, MergeRule};
use crate::model::{Beer, BeerPatch};
use crate::validation::ValidationErrors;

fn beer_name(patch: &BeerPatch, beer: &mut Beer) -> bool {
    overwrite_text(&patch.beer_name, &mut beer.beer_name)
}

fn beer_style(patch: &BeerPatch, beer: &mut Beer) -> bool {
    overwrite(&patch.beer_style, &mut beer.beer_style)
}

fn upc(patch: &BeerPatch, beer: &mut Beer) -> bool {
    overwrite_text(&patch.upc, &mut beer.upc)
}

// Zero is a meaningful quantity and is applied.
fn quantity_on_hand(patch: &BeerPatch, beer: &mut Beer) -> bool {
    overwrite_optional(&patch.quantity_on_hand, &mut beer.quantity_on_hand)
}

fn price(patch: &BeerPatch, beer: &mut Beer) -> bool {
    overwrite(&patch.price, &mut beer.price)
}

pub const BEER_PATCH_RULES: &[MergeRule<BeerPatch, Beer>] = &[
    MergeRule {
        field: "beer_name",
        merge: beer_name,
    },
    MergeRule {
        field: "beer_style",
        merge: beer_style,
    },
    MergeRule {
        field: "upc",
        merge: upc,
    },
    MergeRule {
        field: "quantity_on_hand",
        merge: quantity_on_hand,
    },
    MergeRule {
        field: "price",
        merge: price,
    },
];

/// Merges `patch` into `beer` and re-validates the result.
///
/// Returns the overwritten fields. On a violation `beer` is left untouched.
pub fn merge_patch(beer: &mut Beer, patch: &BeerPatch) -> Result<Vec<&'static str>, ValidationErrors> {
    let mut candidate = beer.clone();
    let changed = merge::apply(BEER_PATCH_RULES, patch, &mut candidate);
    candidate.validate()?;
    *beer = candidate;
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeerDraft, BeerId, BeerStyle};

    fn stored() -> Beer {
        Beer::from_draft(
            BeerId::new(),
            BeerDraft {
                beer_name: "Crank".into(),
                beer_style: Some(BeerStyle::PaleAle),
                upc: "12356222".into(),
                quantity_on_hand: Some(392),
                price: Some(11.99),
            },
        )
        .unwrap()
    }

    #[test]
    fn absent_fields_are_unchanged() {
        let mut beer = stored();
        let before = beer.clone();
        let changed = merge_patch(&mut beer, &BeerPatch::default()).unwrap();
        assert!(changed.is_empty());
        assert_eq!(beer, before);
    }

    #[test]
    fn blank_name_never_overwrites() {
        let mut beer = stored();
        let patch = BeerPatch {
            beer_name: Some("   ".into()),
            price: Some(13.5),
            ..BeerPatch::default()
        };
        let changed = merge_patch(&mut beer, &patch).unwrap();
        assert_eq!(changed, vec!["price"]);
        assert_eq!(beer.beer_name, "Crank");
        assert_eq!(beer.price, 13.5);
    }

    #[test]
    fn zero_quantity_is_applied() {
        let mut beer = stored();
        let patch = BeerPatch {
            quantity_on_hand: Some(0),
            ..BeerPatch::default()
        };
        merge_patch(&mut beer, &patch).unwrap();
        assert_eq!(beer.quantity_on_hand, Some(0));
    }

    #[test]
    fn too_long_name_fails_without_partial_effect() {
        let mut beer = stored();
        let before = beer.clone();
        let patch = BeerPatch {
            beer_name: Some("x".repeat(51)),
            beer_style: Some(BeerStyle::Stout),
            ..BeerPatch::default()
        };
        let err = merge_patch(&mut beer, &patch).unwrap_err();
        assert!(err.has_field("beer_name"));
        assert_eq!(beer, before);
        assert_eq!(patch.beer_name.as_ref().map(String::len), Some(51));
    }

    #[test]
    fn non_positive_price_is_rejected() {
        let mut beer = stored();
        let patch = BeerPatch {
            price: Some(0.0),
            ..BeerPatch::default()
        };
        assert!(merge_patch(&mut beer, &patch).unwrap_err().has_field("price"));
    }
}
