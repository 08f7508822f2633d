//! Response shaping: raw entity records to display-ready cards.
//!
//! # Design
//! `card_cleaner` is a pure function over already-fetched data — no network,
//! no state. Each card struct declares exactly the fields the UI shows for
//! that category; serde drops everything else during deserialization, which
//! is the whole "cleaning" step. A record missing a required field is a
//! `Parse` error rather than a half-filled card.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The fixed entity kinds exposed by the API's root index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Films,
    People,
    Planets,
    Species,
    Vehicles,
    Starships,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Films,
        Category::People,
        Category::Planets,
        Category::Species,
        Category::Vehicles,
        Category::Starships,
    ];

    /// The path segment used to build the collection URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Films => "films",
            Category::People => "people",
            Category::Planets => "planets",
            Category::Species => "species",
            Category::Vehicles => "vehicles",
            Category::Starships => "starships",
        }
    }
}

impl FromStr for Category {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "films" => Ok(Category::Films),
            "people" => Ok(Category::People),
            "planets" => Ok(Category::Planets),
            "species" => Ok(Category::Species),
            "vehicles" => Ok(Category::Vehicles),
            "starships" => Ok(Category::Starships),
            other => Err(ApiError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonCard {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
    pub homeworld: String,
    #[serde(default)]
    pub species: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanetCard {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: String,
    #[serde(default)]
    pub residents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleCard {
    pub name: String,
    pub model: String,
    pub vehicle_class: String,
    pub passengers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarshipCard {
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub passengers: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilmCard {
    pub title: String,
    pub episode_id: i64,
    pub director: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeciesCard {
    pub name: String,
    pub classification: String,
    pub language: String,
}

/// A display-ready, field-reduced version of a raw entity record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Card {
    Person(PersonCard),
    Planet(PlanetCard),
    Vehicle(VehicleCard),
    Starship(StarshipCard),
    Film(FilmCard),
    Species(SpeciesCard),
}

impl Card {
    /// The headline the UI renders for this card.
    pub fn label(&self) -> &str {
        match self {
            Card::Person(c) => &c.name,
            Card::Planet(c) => &c.name,
            Card::Vehicle(c) => &c.name,
            Card::Starship(c) => &c.name,
            Card::Film(c) => &c.title,
            Card::Species(c) => &c.name,
        }
    }
}

/// Map raw records to shaped cards for `category`, preserving order.
pub fn card_cleaner(
    records: &[serde_json::Value],
    category: Category,
) -> Result<Vec<Card>, ApiError> {
    records.iter().map(|record| clean_one(record, category)).collect()
}

fn clean_one(record: &serde_json::Value, category: Category) -> Result<Card, ApiError> {
    let record = record.clone();
    let card = match category {
        Category::People => Card::Person(from_value(record)?),
        Category::Planets => Card::Planet(from_value(record)?),
        Category::Vehicles => Card::Vehicle(from_value(record)?),
        Category::Starships => Card::Starship(from_value(record)?),
        Category::Films => Card::Film(from_value(record)?),
        Category::Species => Card::Species(from_value(record)?),
    };
    Ok(card)
}

fn from_value<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}
