//! Search ranking: text filtering plus color-priority tiers.
//!
//! A query narrows the catalog by code/name text, then orders what is left by
//! tier (lower sorts first):
//!
//! | Tier            | Priority      | Condition                                     |
//! |-----------------|---------------|-----------------------------------------------|
//! | Code            | 1             | code equals the hex input without its `#`     |
//! | Hex             | 2             | entry hex equals the hex input, any case      |
//! | Close           | 3..3+k-1      | n-th of the k nearest catalog colors          |
//! | Rest            | 999           | everything else, or no valid hex input        |
//!
//! Ties keep catalog order. Highlighting is reported per row but never feeds
//! back into the ordering.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, ColorEntry};
use crate::color::Rgb;
use crate::constants;
use crate::matcher;
use crate::math;

/// User input driving a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Partial or full hex color, at most seven chars.
    pub hex_input: Option<String>,
    /// Free text matched against code and name.
    pub text_input: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hex input, truncated to `#RRGGBB` length.
    pub fn with_hex(mut self, hex: &str) -> Self {
        self.hex_input = Some(math::sanitize_hex_input(hex));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_input = Some(text.to_string());
        self
    }

    /// The hex input, only if it is a complete six digit color.
    fn valid_hex(&self) -> Option<&str> {
        self.hex_input.as_deref().filter(|h| math::is_valid_hex(h))
    }
}

/// Row styling hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Highlight {
    /// The entry's hex is the queried color.
    Exact,
    /// The entry is among the nearest catalog colors.
    Close,
    None,
}

/// A catalog entry with its rank for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry<'a> {
    pub entry: &'a ColorEntry,
    pub priority: u32,
    /// Distance to the queried color, when the hex input is valid.
    pub distance: Option<f64>,
    pub highlight: Highlight,
}

/// Ranking knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankerOptions {
    /// How many nearest colors get their own tier.
    pub closest_count: usize,
}

impl Default for RankerOptions {
    fn default() -> Self {
        Self {
            closest_count: constants::DEFAULT_CLOSEST_COUNT,
        }
    }
}

impl RankerOptions {
    /// Parse options from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Orders a catalog for display against a [`Query`].
#[derive(Debug, Clone, Copy)]
pub struct SearchRanker<'a> {
    catalog: &'a Catalog,
    options: RankerOptions,
}

impl<'a> SearchRanker<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            options: RankerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RankerOptions) -> Self {
        self.options = options;
        self
    }

    /// Filter and order the catalog for `query`.
    ///
    /// Deterministic: the same query over the same catalog always gives the
    /// same sequence.
    pub fn rank(&self, query: &Query) -> Vec<RankedEntry<'a>> {
        let catalog = self.catalog;
        let remaining: Vec<&'a ColorEntry> = match query.text_input.as_deref() {
            Some(text) => {
                let needle = text.to_lowercase();
                catalog
                    .iter()
                    .filter(|e| {
                        e.code().to_lowercase().contains(&needle)
                            || e.name().to_lowercase().contains(&needle)
                    })
                    .collect()
            }
            None => catalog.iter().collect(),
        };

        let tiers = query
            .valid_hex()
            .and_then(|hex| ColorTiers::new(hex, catalog, self.options.closest_count));

        let mut ranked: Vec<RankedEntry<'a>> = remaining
            .into_iter()
            .map(|entry| match &tiers {
                Some(tiers) => tiers.rank(entry),
                None => RankedEntry {
                    entry,
                    priority: constants::NO_MATCH_PRIORITY,
                    distance: None,
                    highlight: Highlight::None,
                },
            })
            .collect();
        // Stable, so each tier keeps catalog order.
        ranked.sort_by_key(|r| r.priority);

        log::trace!(
            "ranked {} of {} floss entries (hex: {:?}, text: {:?})",
            ranked.len(),
            catalog.len(),
            query.hex_input,
            query.text_input,
        );
        ranked
    }
}

/// Rank `catalog` for `query` with default options.
pub fn rank<'a>(query: &Query, catalog: &'a Catalog) -> Vec<RankedEntry<'a>> {
    SearchRanker::new(catalog).rank(query)
}

/// Per-query color state, built once a hex input validates.
struct ColorTiers<'a> {
    code: &'a str,
    hex: String,
    target: Rgb,
    closest: Vec<&'a str>,
}

impl<'a> ColorTiers<'a> {
    fn new(hex_input: &'a str, catalog: &'a Catalog, closest_count: usize) -> Option<Self> {
        Some(Self {
            code: math::strip_hash(hex_input),
            hex: math::normalize_hex(hex_input)?,
            target: Rgb::from_hex(hex_input)?,
            closest: matcher::closest(hex_input, catalog, closest_count),
        })
    }

    fn rank<'e>(&self, entry: &'e ColorEntry) -> RankedEntry<'e> {
        let position = self.closest.iter().position(|code| *code == entry.code());
        let exact_hex = entry.hex().eq_ignore_ascii_case(&self.hex);

        let priority = if entry.code() == self.code {
            constants::CODE_MATCH_PRIORITY
        } else if exact_hex {
            constants::HEX_MATCH_PRIORITY
        } else if let Some(n) = position {
            constants::FIRST_CLOSE_PRIORITY + n as u32
        } else {
            constants::NO_MATCH_PRIORITY
        };

        let highlight = if exact_hex {
            Highlight::Exact
        } else if position.is_some() {
            Highlight::Close
        } else {
            Highlight::None
        };

        RankedEntry {
            entry,
            priority,
            distance: Some(self.target.distance(&entry.rgb())),
            highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{rank, Highlight, Query, RankerOptions, SearchRanker};
    use crate::catalog::Catalog;

    fn small() -> Catalog {
        Catalog::from_json(
            r##"[
                {"floss": "310", "name": "Black", "hex": "#000000"},
                {"floss": "321", "name": "Red", "hex": "#C72B3B"},
                {"floss": "666", "name": "Bright Red", "hex": "#E31D42"},
                {"floss": "B5200", "name": "Snow White", "hex": "#FFFFFF"},
                {"floss": "FF0000", "name": "Pure Red", "hex": "#FE0000"},
                {"floss": "996", "name": "Medium Electric Blue", "hex": "#30C2EC"}
            ]"##,
        )
        .unwrap()
    }

    fn codes(catalog: &Catalog, query: &Query) -> Vec<String> {
        rank(query, catalog)
            .iter()
            .map(|r| r.entry.code().to_string())
            .collect()
    }

    #[test]
    fn given_text_matching_a_code_when_ranked_then_only_that_entry_remains() {
        let catalog = Catalog::from_json(
            r##"[
                {"floss": "310", "name": "Black", "hex": "#000000"},
                {"floss": "321", "name": "Red", "hex": "#C72B3B"}
            ]"##,
        )
        .unwrap();
        let ranked = rank(&Query::new().with_text("310"), &catalog);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].entry.code(), "310");
        assert_eq!(ranked[0].priority, 999);
    }

    #[test]
    fn text_filter_matches_names_case_insensitively() {
        let catalog = small();
        assert_eq!(codes(&catalog, &Query::new().with_text("RED")), ["321", "666", "FF0000"]);
        assert_eq!(codes(&catalog, &Query::new().with_text("b52")), ["B5200"]);
    }

    #[test]
    fn given_text_with_no_match_when_ranked_then_result_is_empty() {
        let catalog = small();
        assert!(rank(&Query::new().with_text("chartreuse"), &catalog).is_empty());
        assert!(rank(&Query::new().with_text("chartreuse").with_hex("#000000"), &catalog).is_empty());
    }

    #[test]
    fn given_empty_inputs_when_ranked_then_catalog_order_at_default_priority() {
        let catalog = small();
        let ranked = rank(&Query::new().with_hex("").with_text(""), &catalog);
        let order: Vec<&str> = ranked.iter().map(|r| r.entry.code()).collect();
        assert_eq!(order, ["310", "321", "666", "B5200", "FF0000", "996"]);
        assert!(ranked.iter().all(|r| r.priority == 999));
        assert!(ranked.iter().all(|r| r.highlight == Highlight::None && r.distance.is_none()));
    }

    #[test]
    fn given_exact_hex_when_ranked_then_entry_has_priority_two() {
        let catalog = small();
        let ranked = rank(&Query::new().with_hex("#e31d42"), &catalog);
        assert_eq!(ranked[0].entry.code(), "666");
        assert_eq!(ranked[0].priority, 2);
        assert_eq!(ranked[0].highlight, Highlight::Exact);
        assert_eq!(ranked[0].distance, Some(0.0));
    }

    #[test]
    fn given_hex_equal_to_a_code_when_ranked_then_code_tier_wins() {
        let catalog = small();
        let ranked = rank(&Query::new().with_hex("#FF0000"), &catalog);
        assert_eq!(ranked[0].entry.code(), "FF0000");
        assert_eq!(ranked[0].priority, 1);
        // Also the nearest color, but not an exact hex match.
        assert_eq!(ranked[0].highlight, Highlight::Close);
    }

    #[test]
    fn nearest_colors_take_consecutive_tiers_from_three() {
        let catalog = small();
        let ranker = SearchRanker::new(&catalog).with_options(RankerOptions { closest_count: 3 });
        let ranked = ranker.rank(&Query::new().with_hex("#D02030"));
        let head: Vec<(&str, u32)> = ranked
            .iter()
            .take(3)
            .map(|r| (r.entry.code(), r.priority))
            .collect();
        assert_eq!(head, [("321", 3), ("666", 4), ("FF0000", 5)]);
        assert!(ranked[3..].iter().all(|r| r.priority == 999));
        assert!(ranked[3..].iter().all(|r| r.highlight == Highlight::None));
        let rest: Vec<&str> = ranked[3..].iter().map(|r| r.entry.code()).collect();
        assert_eq!(rest, ["310", "B5200", "996"]);
    }

    #[test]
    fn exact_match_keeps_its_closest_position_out_of_the_close_tiers() {
        let catalog = small();
        let ranker = SearchRanker::new(&catalog).with_options(RankerOptions { closest_count: 2 });
        let ranked = ranker.rank(&Query::new().with_hex("C72B3B"));
        assert_eq!((ranked[0].entry.code(), ranked[0].priority), ("321", 2));
        // 321 is position 0 of the closest set, so the runner-up lands on 4.
        assert_eq!((ranked[1].entry.code(), ranked[1].priority), ("666", 4));
    }

    #[test]
    fn given_partial_hex_when_ranked_then_only_text_filter_applies() {
        let catalog = small();
        let ranked = rank(&Query::new().with_hex("#C72B").with_text("red"), &catalog);
        let order: Vec<&str> = ranked.iter().map(|r| r.entry.code()).collect();
        assert_eq!(order, ["321", "666", "FF0000"]);
        assert!(ranked.iter().all(|r| r.priority == 999));
    }

    #[test]
    fn closest_set_is_drawn_from_the_whole_catalog_not_the_filtered_rows() {
        let catalog = small();
        let ranker = SearchRanker::new(&catalog).with_options(RankerOptions { closest_count: 1 });
        let ranked = ranker.rank(&Query::new().with_hex("#010101").with_text("white"));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].entry.code(), "B5200");
        assert_eq!(ranked[0].priority, 999);
    }

    #[test]
    fn overlong_hex_input_is_truncated_before_ranking() {
        let catalog = small();
        let query = Query::new().with_hex("#E31D42FF");
        assert_eq!(query.hex_input.as_deref(), Some("#E31D42"));
        assert_eq!(rank(&query, &catalog)[0].entry.code(), "666");
    }

    #[test]
    fn empty_catalog_ranks_to_nothing() {
        let catalog = Catalog::default();
        assert!(rank(&Query::new().with_hex("#000000").with_text("3"), &catalog).is_empty());
        assert!(rank(&Query::new(), &catalog).is_empty());
    }

    #[test]
    fn ranking_is_repeatable() {
        let catalog = Catalog::dmc().unwrap();
        let query = Query::new().with_hex("#5A8FB9").with_text("blue");
        assert_eq!(rank(&query, &catalog), rank(&query, &catalog));
    }

    #[test]
    fn options_parse_with_defaults() {
        assert_eq!(RankerOptions::from_json("{}").unwrap().closest_count, 5);
        assert_eq!(RankerOptions::from_json(r#"{"closest_count": 8}"#).unwrap().closest_count, 8);
    }
}
