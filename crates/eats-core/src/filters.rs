//! User-chosen predicates applied when building a candidate pool.
//!
//! A [`FilterCriteria`] is owned by whichever view is showing restaurants and
//! is recomputed on every edit. It never holds restaurant ids; exclusion by
//! list membership happens in the pool builder.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::options::FilterOption;
use crate::restaurants::{PriceLevel, Restaurant};

/// Distance thresholds offered by the filter sheet, in meters.
pub const DISTANCE_OPTIONS_M: [u32; 4] = [500, 1000, 2000, 5000];

/// Cuisine choices shown when the catalog does not provide any.
pub const DEFAULT_CUISINE_TYPES: [&str; 7] = [
    "台式料理",
    "日式料理",
    "韓式料理",
    "義式料理",
    "美式料理",
    "小吃",
    "創意料理",
];

/// Inclusive range of acceptable price levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: PriceLevel,
    max: PriceLevel,
}

impl PriceRange {
    /// Returns `None` when `min` is above `max`.
    #[must_use]
    pub fn new(min: PriceLevel, max: PriceLevel) -> Option<Self> {
        (min <= max).then_some(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> PriceLevel {
        self.min
    }

    #[must_use]
    pub fn max(self) -> PriceLevel {
        self.max
    }

    #[must_use]
    pub fn contains(self, level: PriceLevel) -> bool {
        self.min <= level && level <= self.max
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and address.
    pub search_text: String,
    /// Empty means every cuisine passes.
    pub selected_cuisine_types: BTreeSet<String>,
    /// Maximum distance in meters; `None` is unconstrained.
    pub selected_distance: Option<u32>,
    pub price_range: Option<PriceRange>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    #[must_use]
    pub fn with_cuisine(mut self, cuisine_type: impl Into<String>) -> Self {
        self.selected_cuisine_types.insert(cuisine_type.into());
        self
    }

    #[must_use]
    pub fn with_max_distance(mut self, meters: u32) -> Self {
        self.selected_distance = Some(meters);
        self
    }

    #[must_use]
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Returns `true` if `restaurant` satisfies every active predicate.
    ///
    /// A restaurant without a recorded distance never passes a distance
    /// filter, even if it might be close by.
    #[must_use]
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        self.matches_search(restaurant)
            && self.matches_cuisine(restaurant)
            && self.matches_distance(restaurant)
            && self.matches_price(restaurant)
    }

    fn matches_search(&self, restaurant: &Restaurant) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        restaurant.name.to_lowercase().contains(&needle)
            || restaurant.address.to_lowercase().contains(&needle)
    }

    fn matches_cuisine(&self, restaurant: &Restaurant) -> bool {
        self.selected_cuisine_types.is_empty()
            || self
                .selected_cuisine_types
                .contains(restaurant.cuisine_type.as_str())
    }

    fn matches_distance(&self, restaurant: &Restaurant) -> bool {
        match (self.selected_distance, restaurant.distance) {
            (None, _) => true,
            (Some(max), Some(distance)) => distance <= f64::from(max),
            (Some(_), None) => false,
        }
    }

    fn matches_price(&self, restaurant: &Restaurant) -> bool {
        self.price_range
            .is_none_or(|range| range.contains(restaurant.price_level))
    }

    /// Adds `cuisine_type` if absent, removes it if present.
    ///
    /// Returns `true` when the cuisine is selected after the call.
    pub fn toggle_cuisine(&mut self, cuisine_type: &str) -> bool {
        if self.selected_cuisine_types.remove(cuisine_type) {
            false
        } else {
            self.selected_cuisine_types.insert(cuisine_type.to_string());
            true
        }
    }

    /// Selects a distance threshold. Choosing the threshold that is already
    /// selected clears it, matching the single-select toggle buttons.
    pub fn select_distance(&mut self, meters: Option<u32>) {
        self.selected_distance = match meters {
            Some(m) if self.selected_distance == Some(m) => None,
            other => other,
        };
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    /// Clears the filter-sheet selections. The search text is kept because
    /// it belongs to the separate search bar.
    pub fn clear(&mut self) {
        self.selected_cuisine_types.clear();
        self.selected_distance = None;
        self.price_range = None;
    }

    /// Clears everything, including the search text.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of filter-sheet selections currently applied.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.selected_cuisine_types.len()
            + usize::from(self.selected_distance.is_some())
            + usize::from(self.price_range.is_some())
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.active_filter_count() > 0
    }
}

/// Human-readable label for a distance threshold.
///
/// Below one kilometre the value is shown in meters (`"500公尺內"`), otherwise
/// in kilometres (`"1公里內"`, `"1.5公里內"`).
#[must_use]
pub fn distance_label(meters: u32) -> String {
    if meters < 1000 {
        format!("{meters}公尺內")
    } else {
        let km = f64::from(meters) / 1000.0;
        format!("{km}公里內")
    }
}

/// The standard distance thresholds as selectable options.
#[must_use]
pub fn distance_options() -> Vec<FilterOption> {
    DISTANCE_OPTIONS_M
        .iter()
        .map(|&m| FilterOption::from((m, distance_label(m).as_str())))
        .collect()
}

/// Cuisine options for the filter sheet, falling back to
/// [`DEFAULT_CUISINE_TYPES`] when `available` is empty.
#[must_use]
pub fn cuisine_options(available: &[&str]) -> Vec<FilterOption> {
    if available.is_empty() {
        crate::options::normalize_options(DEFAULT_CUISINE_TYPES)
    } else {
        crate::options::normalize_options(available.iter().copied())
    }
}
