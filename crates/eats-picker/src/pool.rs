//! Candidate pool construction.

use std::str::FromStr;

use eats_core::{Catalog, FilterCriteria, Restaurant};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::lists::ListState;

/// Which base set seeds the pool before filters and the blacklist apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolMode {
    #[default]
    All,
    Favorites,
    WheelList,
}

impl std::fmt::Display for PoolMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolMode::All => write!(f, "all"),
            PoolMode::Favorites => write!(f, "favorites"),
            PoolMode::WheelList => write!(f, "wheel-list"),
        }
    }
}

impl FromStr for PoolMode {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(PoolMode::All),
            "favorites" | "favourites" => Ok(PoolMode::Favorites),
            "wheel-list" | "wheel_list" | "wheel" => Ok(PoolMode::WheelList),
            _ => Err(PickerError::InvalidMode(s.to_string())),
        }
    }
}

/// Returns `true` if `restaurant` belongs in a `mode` pool.
///
/// The blacklist is checked first and always wins over favorite or
/// wheel-list membership.
#[must_use]
pub fn is_candidate(
    restaurant: &Restaurant,
    lists: &ListState,
    criteria: &FilterCriteria,
    mode: PoolMode,
) -> bool {
    if lists.is_blacklisted(&restaurant.id) {
        return false;
    }

    let in_base_set = match mode {
        PoolMode::All => true,
        PoolMode::Favorites => lists.is_favorite(&restaurant.id),
        PoolMode::WheelList => lists.in_wheel_list(&restaurant.id),
    };

    in_base_set && criteria.matches(restaurant)
}

/// Build the candidate pool for `mode` in catalog order.
///
/// Pure: the same inputs always produce the same sequence. An empty result
/// is a normal outcome, not an error.
#[must_use]
pub fn build_pool<'a>(
    catalog: &'a Catalog,
    lists: &ListState,
    criteria: &FilterCriteria,
    mode: PoolMode,
) -> Vec<&'a Restaurant> {
    let pool: Vec<&Restaurant> = catalog
        .iter()
        .filter(|r| is_candidate(r, lists, criteria, mode))
        .collect();

    tracing::trace!(
        mode = %mode,
        catalog_size = catalog.len(),
        pool_size = pool.len(),
        active_filters = criteria.active_filter_count(),
        "built candidate pool"
    );

    pool
}

#[cfg(test)]
mod tests {
    use eats_core::PriceLevel;

    use super::*;

    fn make_restaurant(id: &str, cuisine_type: &str, distance: Option<f64>) -> Restaurant {
        Restaurant {
            id: id.to_string(),
            name: format!("Restaurant {id}"),
            address: format!("{id} Food Street"),
            latitude: None,
            longitude: None,
            rating: 4.0,
            price_level: PriceLevel::new(2).unwrap(),
            cuisine_type: cuisine_type.to_string(),
            distance,
            image_url: None,
        }
    }

    fn two_restaurant_catalog() -> Catalog {
        Catalog::new(vec![
            make_restaurant("1", "日式", Some(400.0)),
            make_restaurant("2", "台式", Some(1200.0)),
        ])
        .unwrap()
    }

    fn ids(pool: &[&Restaurant]) -> Vec<String> {
        pool.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn wheel_list_pool_respects_distance_filter() {
        let catalog = two_restaurant_catalog();
        let mut lists = ListState::new();
        lists.toggle_wheel_list("1");
        lists.toggle_wheel_list("2");
        let criteria = FilterCriteria::new().with_max_distance(1000);

        let pool = build_pool(&catalog, &lists, &criteria, PoolMode::WheelList);
        assert_eq!(ids(&pool), vec!["1"]);
    }

    #[test]
    fn all_mode_drops_blacklisted() {
        let catalog = two_restaurant_catalog();
        let mut lists = ListState::new();
        lists.toggle_blacklist("1");

        let pool = build_pool(&catalog, &lists, &FilterCriteria::new(), PoolMode::All);
        assert_eq!(ids(&pool), vec!["2"]);
    }

    #[test]
    fn favorites_mode_only_includes_favorites() {
        let catalog = two_restaurant_catalog();
        let mut lists = ListState::new();
        lists.toggle_favorite("2");

        let pool = build_pool(&catalog, &lists, &FilterCriteria::new(), PoolMode::Favorites);
        assert_eq!(ids(&pool), vec!["2"]);
    }

    #[test]
    fn blacklist_wins_over_favorite_and_wheel_list() {
        let catalog = two_restaurant_catalog();
        let mut lists = ListState::new();
        lists.toggle_favorite("1");
        lists.toggle_wheel_list("1");
        lists.toggle_blacklist("1");

        for mode in [PoolMode::All, PoolMode::Favorites, PoolMode::WheelList] {
            let pool = build_pool(&catalog, &lists, &FilterCriteria::new(), mode);
            assert!(
                pool.iter().all(|r| r.id != "1"),
                "blacklisted id leaked into {mode} pool"
            );
        }
    }

    #[test]
    fn empty_wheel_list_yields_empty_pool() {
        let catalog = two_restaurant_catalog();
        let pool = build_pool(
            &catalog,
            &ListState::new(),
            &FilterCriteria::new(),
            PoolMode::WheelList,
        );
        assert!(pool.is_empty());
    }

    #[test]
    fn pool_preserves_catalog_order() {
        let catalog = Catalog::new(vec![
            make_restaurant("c", "小吃", None),
            make_restaurant("a", "小吃", None),
            make_restaurant("b", "小吃", None),
        ])
        .unwrap();
        let pool = build_pool(&catalog, &ListState::new(), &FilterCriteria::new(), PoolMode::All);
        assert_eq!(ids(&pool), vec!["c", "a", "b"]);
    }

    #[test]
    fn pool_mode_parses_and_displays() {
        assert_eq!("all".parse::<PoolMode>(), Ok(PoolMode::All));
        assert_eq!("FAVORITES".parse::<PoolMode>(), Ok(PoolMode::Favorites));
        assert_eq!("wheel-list".parse::<PoolMode>(), Ok(PoolMode::WheelList));
        assert_eq!(PoolMode::WheelList.to_string(), "wheel-list");
        assert!("random".parse::<PoolMode>().is_err());
    }
}
