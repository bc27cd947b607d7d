//! Filter predicate composition for beer listings.

use crate::model::{Beer, BeerStyle};
use crate::validation::has_text;

/// The query plan chosen for a listing.
///
/// | name has text | style present | plan |
/// |---|---|---|
/// | yes | no | `ByName` |
/// | no | yes | `ByStyle` |
/// | yes | yes | `ByNameAndStyle` |
/// | no | no | `All` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeerQuery {
    All,
    /// Case-insensitive substring anywhere in the name. Holds the lowercased fragment.
    ByName(String),
    ByStyle(BeerStyle),
    ByNameAndStyle(String, BeerStyle),
}

impl BeerQuery {
    /// Picks the plan. A blank name fragment counts as absent.
    pub fn compose(beer_name: Option<&str>, beer_style: Option<BeerStyle>) -> Self {
        let needle = beer_name.filter(|name| has_text(name)).map(str::to_lowercase);
        match (needle, beer_style) {
            (Some(needle), None) => BeerQuery::ByName(needle),
            (None, Some(style)) => BeerQuery::ByStyle(style),
            (Some(needle), Some(style)) => BeerQuery::ByNameAndStyle(needle, style),
            (None, None) => BeerQuery::All,
        }
    }

    pub fn matches(&self, beer: &Beer) -> bool {
        let name_contains = |needle: &str| beer.beer_name.to_lowercase().contains(needle);
        match self {
            BeerQuery::All => true,
            BeerQuery::ByName(needle) => name_contains(needle),
            BeerQuery::ByStyle(style) => beer.beer_style == *style,
            BeerQuery::ByNameAndStyle(needle, style) => {
                beer.beer_style == *style && name_contains(needle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BeerDraft, BeerId};

    fn beer(name: &str, style: BeerStyle) -> Beer {
        Beer::from_draft(
            BeerId::new(),
            BeerDraft {
                beer_name: name.into(),
                beer_style: Some(style),
                upc: "0631234200036".into(),
                quantity_on_hand: Some(5),
                price: Some(9.5),
            },
        )
        .unwrap()
    }

    #[test]
    fn compose_follows_precedence_table() {
        assert_eq!(BeerQuery::compose(None, None), BeerQuery::All);
        assert_eq!(BeerQuery::compose(Some("  "), None), BeerQuery::All);
        assert_eq!(
            BeerQuery::compose(Some("IPA"), None),
            BeerQuery::ByName("ipa".into())
        );
        assert_eq!(
            BeerQuery::compose(Some(""), Some(BeerStyle::Stout)),
            BeerQuery::ByStyle(BeerStyle::Stout)
        );
        assert_eq!(
            BeerQuery::compose(Some("Cat"), Some(BeerStyle::PaleAle)),
            BeerQuery::ByNameAndStyle("cat".into(), BeerStyle::PaleAle)
        );
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let query = BeerQuery::compose(Some("ipa"), None);
        assert!(query.matches(&beer("Hazy IPA", BeerStyle::Ipa)));
        assert!(query.matches(&beer("Sipacious", BeerStyle::Lager)));
        assert!(!query.matches(&beer("Crank", BeerStyle::PaleAle)));
    }

    #[test]
    fn combined_plan_needs_both() {
        let query = BeerQuery::compose(Some("cat"), Some(BeerStyle::PaleAle));
        assert!(query.matches(&beer("Galaxy Cat", BeerStyle::PaleAle)));
        assert!(!query.matches(&beer("Galaxy Cat", BeerStyle::Ipa)));
        assert!(!query.matches(&beer("Crank", BeerStyle::PaleAle)));
    }
}
