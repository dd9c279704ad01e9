// src/model.rs
//! Value types for decks and cards as they appear in the JSON deck files.
//!
//! Both types are plain data: the parser builds them, everything downstream
//! only reads. Enum labels that the files use but we do not recognize map to
//! `Unknown` instead of failing the whole deck.

use serde::Deserialize;
use std::fmt;

/// What kind of card an entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Unit,
    Special,
    Artifact,
    Stratagem,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardType::Unit => "UNIT",
            CardType::Special => "SPECIAL",
            CardType::Artifact => "ARTIFACT",
            CardType::Stratagem => "STRATAGEM",
            CardType::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Faction a card or deck belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Faction {
    Monsters,
    Nilfgaard,
    NorthernRealms,
    Scoiatael,
    Skellige,
    Syndicate,
    Neutral,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Faction::Monsters => "MONSTERS",
            Faction::Nilfgaard => "NILFGAARD",
            Faction::NorthernRealms => "NORTHERN_REALMS",
            Faction::Scoiatael => "SCOIATAEL",
            Faction::Skellige => "SKELLIGE",
            Faction::Syndicate => "SYNDICATE",
            Faction::Neutral => "NEUTRAL",
            Faction::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Treats a JSON `null` like an absent field: missing and null enum labels
/// both land on the `Unknown` default instead of failing the file.
fn null_as_unknown<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A single card entry within a deck.
///
/// `provision` and `power` stay `None` when the file omits them; "unset" is
/// a distinct state, not zero. Negative values are nonsensical but parse,
/// so a sloppy file still counts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub name: String,
    pub provision: Option<i32>,
    pub power: Option<i32>,
    #[serde(rename = "type", default, deserialize_with = "null_as_unknown")]
    pub card_type: CardType,
    #[serde(default, deserialize_with = "null_as_unknown")]
    pub faction: Faction,
}

/// One deck: metadata plus its ordered card list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_unknown")]
    pub faction: Faction,
    #[serde(rename = "leaderAbility")]
    pub leader_ability: Option<String>,
    #[serde(rename = "provisionLimit")]
    pub provision_limit: Option<i32>,
    pub categories: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    /// Sum of `power` over UNIT cards that have a power value.
    #[must_use]
    pub fn total_unit_power(&self) -> i32 {
        self.cards
            .iter()
            .filter(|c| c.card_type == CardType::Unit)
            .filter_map(|c| c.power)
            .sum()
    }

    /// Sum of `provision` over all cards that have a provision cost.
    #[must_use]
    pub fn total_provision_used(&self) -> i32 {
        self.cards.iter().filter_map(|c| c.provision).sum()
    }

    /// Splits the raw comma-separated `categories` field into trimmed,
    /// non-empty tokens, preserving their order.
    #[must_use]
    pub fn category_list(&self) -> Vec<&str> {
        match &self.categories {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
            None => Vec::new(),
        }
    }
}
