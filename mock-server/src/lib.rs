//! SWAPI-shaped mock server for integration tests.
//!
//! Serves a static, read-only dataset: the root resource index, one list
//! endpoint per category, and per-entity lookups. Records carry the fields
//! the real API exposes so the core's shaper sees realistic bodies.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const CATEGORIES: [&str; 6] = [
    "films", "people", "planets", "species", "vehicles", "starships",
];

/// The root index body: one collection path per category.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceIndex {
    pub films: String,
    pub people: String,
    pub planets: String,
    pub species: String,
    pub vehicles: String,
    pub starships: String,
}

/// Immutable seeded records, one list per category.
#[derive(Debug)]
pub struct Dataset {
    films: Vec<Value>,
    people: Vec<Value>,
    planets: Vec<Value>,
    species: Vec<Value>,
    vehicles: Vec<Value>,
    starships: Vec<Value>,
}

impl Dataset {
    pub fn collection(&self, category: &str) -> Option<&[Value]> {
        match category {
            "films" => Some(&self.films),
            "people" => Some(&self.people),
            "planets" => Some(&self.planets),
            "species" => Some(&self.species),
            "vehicles" => Some(&self.vehicles),
            "starships" => Some(&self.starships),
            _ => None,
        }
    }
}

/// Build the seeded dataset every server instance shares.
pub fn seed() -> Dataset {
    Dataset {
        films: vec![
            json!({
                "title": "A New Hope",
                "episode_id": 4,
                "opening_crawl": "It is a period of civil war.",
                "director": "George Lucas",
                "release_date": "1977-05-25"
            }),
            json!({
                "title": "The Empire Strikes Back",
                "episode_id": 5,
                "opening_crawl": "It is a dark time for the Rebellion.",
                "director": "Irvin Kershner",
                "release_date": "1980-05-17"
            }),
            json!({
                "title": "Return of the Jedi",
                "episode_id": 6,
                "opening_crawl": "Luke Skywalker has returned to his home planet.",
                "director": "Richard Marquand",
                "release_date": "1983-05-25"
            }),
        ],
        people: vec![
            json!({
                "name": "Luke Skywalker",
                "birth_year": "19BBY",
                "gender": "male",
                "homeworld": "/planets/1",
                "species": [],
                "height": "172",
                "mass": "77"
            }),
            json!({
                "name": "C-3PO",
                "birth_year": "112BBY",
                "gender": "n/a",
                "homeworld": "/planets/1",
                "species": ["/species/2"],
                "height": "167",
                "mass": "75"
            }),
        ],
        planets: vec![
            json!({
                "name": "Tatooine",
                "climate": "arid",
                "terrain": "desert",
                "population": "200000",
                "residents": ["/people/1"],
                "diameter": "10465"
            }),
            json!({
                "name": "Alderaan",
                "climate": "temperate",
                "terrain": "grasslands, mountains",
                "population": "2000000000",
                "residents": [],
                "diameter": "12500"
            }),
        ],
        species: vec![
            json!({
                "name": "Human",
                "classification": "mammal",
                "language": "Galactic Basic",
                "average_lifespan": "120"
            }),
            json!({
                "name": "Droid",
                "classification": "artificial",
                "language": "n/a",
                "average_lifespan": "indefinite"
            }),
        ],
        vehicles: vec![json!({
            "name": "Sand Crawler",
            "model": "Digger Crawler",
            "vehicle_class": "wheeled",
            "passengers": "30",
            "manufacturer": "Corellia Mining Corporation"
        })],
        starships: vec![json!({
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "starship_class": "Light freighter",
            "passengers": "6",
            "manufacturer": "Corellian Engineering Corporation"
        })],
    }
}

type AppState = Arc<Dataset>;

pub fn app() -> Router {
    let state: AppState = Arc::new(seed());
    Router::new()
        .route("/", get(index))
        .route("/{category}", get(list_collection))
        .route("/{category}/{id}", get(get_entity))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn index() -> Json<ResourceIndex> {
    Json(ResourceIndex {
        films: "/films".to_string(),
        people: "/people".to_string(),
        planets: "/planets".to_string(),
        species: "/species".to_string(),
        vehicles: "/vehicles".to_string(),
        starships: "/starships".to_string(),
    })
}

async fn list_collection(
    State(db): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let records = db.collection(&category).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "count": records.len(),
        "next": null,
        "previous": null,
        "results": records
    })))
}

async fn get_entity(
    State(db): State<AppState>,
    Path((category, id)): Path<(String, usize)>,
) -> Result<Json<Value>, StatusCode> {
    let records = db.collection(&category).ok_or(StatusCode::NOT_FOUND)?;
    // Ids are 1-based, matching the upstream API.
    id.checked_sub(1)
        .and_then(|i| records.get(i))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
