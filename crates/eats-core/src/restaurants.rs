use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Price bracket from `$` (1) to `$$$$` (4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceLevel(u8);

impl PriceLevel {
    pub const CHEAPEST: PriceLevel = PriceLevel(1);
    pub const PRICIEST: PriceLevel = PriceLevel(4);

    /// Returns `None` unless `level` is within 1–4.
    #[must_use]
    pub fn new(level: u8) -> Option<Self> {
        (1..=4).contains(&level).then_some(Self(level))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("invalid price level {value}; must be 1-4"))
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&"$".repeat(usize::from(self.0)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub rating: f64,
    pub price_level: PriceLevel,
    /// Free-text category such as `"日式料理"`; not a closed set.
    pub cuisine_type: String,
    /// Precomputed distance from the user in meters.
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Restaurant {
    /// Map position as `(latitude, longitude)`.
    ///
    /// `None` when either coordinate is missing, non-finite, or out of range;
    /// such records stay eligible for list and wheel pools but cannot be
    /// placed on a map.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let lat = self.latitude.filter(|v| v.is_finite() && (-90.0..=90.0).contains(v))?;
        let lng = self
            .longitude
            .filter(|v| v.is_finite() && (-180.0..=180.0).contains(v))?;
        Some((lat, lng))
    }
}

#[derive(Debug, Deserialize)]
pub struct RestaurantsFile {
    pub restaurants: Vec<Restaurant>,
}

/// The immutable, validated set of restaurants for a session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] describing the first invalid record.
    pub fn new(restaurants: Vec<Restaurant>) -> Result<Self, ConfigError> {
        validate_restaurants(&restaurants)?;
        Ok(Self { restaurants })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Restaurant> {
        self.restaurants.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Restaurant] {
        &self.restaurants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    /// Distinct cuisine types in first-seen catalog order.
    #[must_use]
    pub fn cuisine_types(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.restaurants
            .iter()
            .map(|r| r.cuisine_type.as_str())
            .filter(|c| !c.trim().is_empty() && seen.insert(*c))
            .collect()
    }

    /// Restaurants that can be placed on a map.
    pub fn mappable(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| r.coordinates().is_some())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Restaurant;
    type IntoIter = std::slice::Iter<'a, Restaurant>;

    fn into_iter(self) -> Self::IntoIter {
        self.restaurants.iter()
    }
}

/// Load and validate the restaurant catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: RestaurantsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::CatalogFileParse)?;

    Catalog::new(file.restaurants)
}

fn validate_restaurants(restaurants: &[Restaurant]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for restaurant in restaurants {
        if restaurant.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "restaurant id must be non-empty".to_string(),
            ));
        }

        if restaurant.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "restaurant '{}' must have a non-empty name",
                restaurant.id
            )));
        }

        if !seen_ids.insert(restaurant.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate restaurant id: '{}'",
                restaurant.id
            )));
        }

        if !(0.0..=5.0).contains(&restaurant.rating) {
            return Err(ConfigError::Validation(format!(
                "restaurant '{}' has invalid rating {}; must be between 0 and 5",
                restaurant.id, restaurant.rating
            )));
        }

        if let Some(distance) = restaurant.distance {
            if !distance.is_finite() || distance < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "restaurant '{}' has invalid distance {distance}",
                    restaurant.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "restaurants_test.rs"]
mod tests;
