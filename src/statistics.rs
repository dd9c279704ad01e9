// src/statistics.rs
//! Frequency tables over a parsed deck collection.
//!
//! Counting runs single-threaded over immutable decks, strictly after the
//! processor has joined its workers. Labels are accumulated in the order
//! they are first seen; the final table is a stable sort by count
//! descending, so ties keep their first-encounter order. That iteration
//! order is part of the contract (downstream writers print a top-N view).

use std::collections::HashMap;

use crate::error::{DeckstatError, Result};
use crate::model::{CardType, Deck};

/// Attribute names accepted by [`calculate`], matched case-insensitively.
pub const SUPPORTED_ATTRIBUTES: &str =
    "faction, type, provision, power, leaderAbility, totalPower, deckFaction, categories";

/// Counts occurrences of `attribute` across `decks` and returns the
/// `(label, count)` table sorted by count descending, ties in
/// first-encounter order.
///
/// # Errors
///
/// Returns `UnsupportedAttribute` for any attribute not in
/// [`SUPPORTED_ATTRIBUTES`].
pub fn calculate(decks: &[Deck], attribute: &str) -> Result<Vec<(String, usize)>> {
    let tally = match attribute.to_lowercase().as_str() {
        "faction" => count_card_factions(decks),
        "type" | "cardtype" => count_card_types(decks),
        "provision" => count_provisions(decks),
        "power" => count_unit_powers(decks),
        "leaderability" => count_leader_abilities(decks),
        "totalpower" => count_total_power_buckets(decks),
        "deckfaction" => count_deck_factions(decks),
        "categories" | "category" => count_categories(decks),
        _ => {
            return Err(DeckstatError::UnsupportedAttribute {
                attribute: attribute.to_string(),
                supported: SUPPORTED_ATTRIBUTES,
            })
        }
    };
    Ok(tally.into_sorted())
}

/// Insertion-ordered counter: `counts` holds the totals, `order` remembers
/// the first time each label appeared.
#[derive(Default)]
struct Tally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl Tally {
    fn bump(&mut self, label: impl Into<String>) {
        let label = label.into();
        match self.counts.get_mut(&label) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(label.clone(), 1);
                self.order.push(label);
            }
        }
    }

    fn into_sorted(self) -> Vec<(String, usize)> {
        let counts = self.counts;
        let mut entries: Vec<(String, usize)> = self
            .order
            .into_iter()
            .map(|label| {
                let count = counts[&label];
                (label, count)
            })
            .collect();
        // Stable sort over insertion order: equal counts keep the order the
        // labels were first encountered in.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

fn count_card_factions(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        for card in &deck.cards {
            tally.bump(card.faction.to_string());
        }
    }
    tally
}

fn count_card_types(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        for card in &deck.cards {
            tally.bump(card.card_type.to_string());
        }
    }
    tally
}

fn count_provisions(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        for card in &deck.cards {
            match card.provision {
                Some(p) => tally.bump(p.to_string()),
                None => tally.bump("UNKNOWN"),
            }
        }
    }
    tally
}

/// Power is only meaningful on UNIT cards; other types are skipped rather
/// than counted as zero.
fn count_unit_powers(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        for card in &deck.cards {
            if card.card_type == CardType::Unit {
                match card.power {
                    Some(p) => tally.bump(p.to_string()),
                    None => tally.bump("0"),
                }
            }
        }
    }
    tally
}

fn count_leader_abilities(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        match &deck.leader_ability {
            Some(ability) => tally.bump(ability.clone()),
            None => tally.bump("UNKNOWN"),
        }
    }
    tally
}

fn count_total_power_buckets(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        tally.bump(power_bucket(deck.total_unit_power()));
    }
    tally
}

fn count_deck_factions(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        tally.bump(deck.faction.to_string());
    }
    tally
}

fn count_categories(decks: &[Deck]) -> Tally {
    let mut tally = Tally::default();
    for deck in decks {
        for category in deck.category_list() {
            tally.bump(category);
        }
    }
    tally
}

// Cascade mirrors the label rules: exactly 0 is its own bucket, then
// everything at or below each upper bound. Negative totals (possible with
// sloppy power values) land in "1-50" with the rest of the sub-51 range.
fn power_bucket(total: i32) -> &'static str {
    match total {
        0 => "0",
        i32::MIN..=50 => "1-50",
        51..=100 => "51-100",
        101..=150 => "101-150",
        151..=200 => "151-200",
        _ => "200+",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Faction};

    fn card(card_type: CardType, power: Option<i32>, provision: Option<i32>) -> Card {
        Card {
            name: String::new(),
            provision,
            power,
            card_type,
            faction: Faction::Neutral,
        }
    }

    fn deck_with_cards(cards: Vec<Card>) -> Deck {
        Deck {
            name: String::new(),
            faction: Faction::Monsters,
            leader_ability: None,
            provision_limit: None,
            categories: None,
            cards,
        }
    }

    #[test]
    fn power_counts_only_unit_cards() {
        let decks = vec![deck_with_cards(vec![
            card(CardType::Unit, Some(3), None),
            card(CardType::Unit, Some(3), None),
            card(CardType::Special, Some(0), None),
            card(CardType::Artifact, Some(0), None),
            card(CardType::Stratagem, Some(0), None),
        ])];
        let stats = calculate(&decks, "power").unwrap();
        assert_eq!(stats, vec![("3".to_string(), 2)]);
    }

    #[test]
    fn power_unset_on_unit_counts_as_zero() {
        let decks = vec![deck_with_cards(vec![card(CardType::Unit, None, None)])];
        let stats = calculate(&decks, "power").unwrap();
        assert_eq!(stats, vec![("0".to_string(), 1)]);
    }

    #[test]
    fn provision_unset_counts_as_unknown() {
        let decks = vec![deck_with_cards(vec![
            card(CardType::Unit, None, Some(6)),
            card(CardType::Unit, None, None),
        ])];
        let stats = calculate(&decks, "provision").unwrap();
        assert_eq!(
            stats,
            vec![("6".to_string(), 1), ("UNKNOWN".to_string(), 1)]
        );
    }

    #[test]
    fn totalpower_buckets_decks() {
        let decks = vec![
            deck_with_cards(vec![card(CardType::Unit, Some(20), None)]),
            deck_with_cards(vec![card(CardType::Unit, Some(45), None)]),
        ];
        let stats = calculate(&decks, "totalPower").unwrap();
        assert_eq!(stats, vec![("1-50".to_string(), 2)]);
    }

    #[test]
    fn negative_power_is_counted_under_its_own_label() {
        let decks = vec![deck_with_cards(vec![card(CardType::Unit, Some(-2), None)])];
        let stats = calculate(&decks, "power").unwrap();
        assert_eq!(stats, vec![("-2".to_string(), 1)]);
    }

    #[test]
    fn totalpower_bucket_boundaries() {
        assert_eq!(power_bucket(-5), "1-50");
        assert_eq!(power_bucket(0), "0");
        assert_eq!(power_bucket(1), "1-50");
        assert_eq!(power_bucket(50), "1-50");
        assert_eq!(power_bucket(51), "51-100");
        assert_eq!(power_bucket(100), "51-100");
        assert_eq!(power_bucket(101), "101-150");
        assert_eq!(power_bucket(150), "101-150");
        assert_eq!(power_bucket(151), "151-200");
        assert_eq!(power_bucket(200), "151-200");
        assert_eq!(power_bucket(201), "200+");
    }

    #[test]
    fn leaderability_per_deck_unknown_when_unset() {
        let mut with_leader = deck_with_cards(Vec::new());
        with_leader.leader_ability = Some("Fruits of Ysgith".to_string());
        let decks = vec![with_leader, deck_with_cards(Vec::new())];
        let stats = calculate(&decks, "leaderAbility").unwrap();
        assert_eq!(
            stats,
            vec![
                ("Fruits of Ysgith".to_string(), 1),
                ("UNKNOWN".to_string(), 1)
            ]
        );
    }

    #[test]
    fn deckfaction_counts_one_per_deck() {
        let decks = vec![deck_with_cards(Vec::new()), deck_with_cards(Vec::new())];
        let stats = calculate(&decks, "deckFaction").unwrap();
        assert_eq!(stats, vec![("MONSTERS".to_string(), 2)]);
    }

    #[test]
    fn categories_counts_trimmed_tokens() {
        let mut deck = deck_with_cards(Vec::new());
        deck.categories = Some(" Control , Tempo , Control ".to_string());
        let stats = calculate(&[deck], "categories").unwrap();
        assert_eq!(
            stats,
            vec![("Control".to_string(), 2), ("Tempo".to_string(), 1)]
        );
    }

    #[test]
    fn sorted_by_count_descending() {
        // A seen 3 times, B twice, C once, inserted in that encounter order.
        let decks = vec![deck_with_cards(vec![
            card(CardType::Unit, None, Some(1)),
            card(CardType::Unit, None, Some(1)),
            card(CardType::Unit, None, Some(1)),
            card(CardType::Unit, None, Some(2)),
            card(CardType::Unit, None, Some(2)),
            card(CardType::Unit, None, Some(3)),
        ])];
        let stats = calculate(&decks, "provision").unwrap();
        assert_eq!(
            stats,
            vec![
                ("1".to_string(), 3),
                ("2".to_string(), 2),
                ("3".to_string(), 1)
            ]
        );
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        // X and Y both count 1; X was encountered first and must stay first.
        let decks = vec![deck_with_cards(vec![
            card(CardType::Unit, None, Some(9)),
            card(CardType::Unit, None, Some(7)),
        ])];
        let stats = calculate(&decks, "provision").unwrap();
        assert_eq!(
            stats,
            vec![("9".to_string(), 1), ("7".to_string(), 1)]
        );
    }

    #[test]
    fn attribute_matching_is_case_insensitive() {
        let decks = vec![deck_with_cards(vec![card(CardType::Unit, None, None)])];
        assert!(calculate(&decks, "TYPE").is_ok());
        assert!(calculate(&decks, "CardType").is_ok());
        assert!(calculate(&decks, "LeaderAbility").is_ok());
    }

    #[test]
    fn empty_deck_collection_yields_empty_table() {
        for attribute in [
            "faction",
            "type",
            "provision",
            "power",
            "leaderability",
            "totalpower",
            "deckfaction",
            "categories",
        ] {
            let stats = calculate(&[], attribute).unwrap();
            assert!(stats.is_empty(), "attribute {attribute} should be empty");
        }
    }

    #[test]
    fn unsupported_attribute_is_an_error() {
        let err = calculate(&[], "bogus").unwrap_err();
        match err {
            DeckstatError::UnsupportedAttribute { attribute, .. } => {
                assert_eq!(attribute, "bogus");
            }
            other => panic!("expected UnsupportedAttribute, got {other}"),
        }
    }
}
