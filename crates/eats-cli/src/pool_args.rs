//! Filter and list flags shared by every pool-reading subcommand.

use std::sync::Arc;

use anyhow::Context;
use clap::Args;
use eats_core::{AppConfig, Catalog, FilterCriteria, PriceLevel, PriceRange};
use eats_picker::{ListKind, PoolMode};
use eats_session::{AuthService, Session};

#[derive(Debug, Clone, Default, Args)]
pub struct PoolArgs {
    /// Base set to draw from: all, favorites, or wheel-list
    #[arg(long, default_value = "all")]
    pub mode: PoolMode,
    /// Case-insensitive text matched against name and address
    #[arg(long, default_value = "")]
    pub search: String,
    /// Cuisine type to include (repeatable; any match passes)
    #[arg(long = "cuisine")]
    pub cuisines: Vec<String>,
    /// Maximum distance in meters
    #[arg(long)]
    pub max_distance: Option<u32>,
    /// Cheapest price level to include (1-4)
    #[arg(long, value_parser = parse_price_level)]
    pub min_price: Option<PriceLevel>,
    /// Priciest price level to include (1-4)
    #[arg(long, value_parser = parse_price_level)]
    pub max_price: Option<PriceLevel>,
    /// Restaurant id to mark as a favorite (repeatable)
    #[arg(long = "favorite")]
    pub favorites: Vec<String>,
    /// Restaurant id to blacklist (repeatable)
    #[arg(long = "blacklist")]
    pub blacklist: Vec<String>,
    /// Restaurant id to put on the wheel list (repeatable)
    #[arg(long = "wheel")]
    pub wheel: Vec<String>,
}

impl PoolArgs {
    /// Build the filter criteria described by the flags.
    ///
    /// # Errors
    ///
    /// Returns an error when `--min-price` is above `--max-price`.
    pub fn criteria(&self) -> anyhow::Result<FilterCriteria> {
        let mut criteria = FilterCriteria::new().with_search(self.search.clone());
        for cuisine in &self.cuisines {
            criteria.selected_cuisine_types.insert(cuisine.clone());
        }
        criteria.selected_distance = self.max_distance;

        if self.min_price.is_some() || self.max_price.is_some() {
            let min = self.min_price.unwrap_or(PriceLevel::CHEAPEST);
            let max = self.max_price.unwrap_or(PriceLevel::PRICIEST);
            let range = PriceRange::new(min, max).ok_or_else(|| {
                anyhow::anyhow!("--min-price {min} is above --max-price {max}")
            })?;
            criteria.set_price_range(Some(range));
        }

        Ok(criteria)
    }

    /// Build a session over `catalog` with the list flags applied.
    ///
    /// # Errors
    ///
    /// Returns an error when a list flag names an id missing from the catalog.
    pub fn session(&self, catalog: Arc<Catalog>, config: &AppConfig) -> anyhow::Result<Session> {
        let auth = AuthService::with_demo_user(config.password_salt.clone());
        let mut session = Session::new(catalog, auth);

        for (kind, ids) in [
            (ListKind::Favorites, &self.favorites),
            (ListKind::Blacklist, &self.blacklist),
            (ListKind::WheelList, &self.wheel),
        ] {
            for id in ids {
                session
                    .include(kind, id)
                    .with_context(|| format!("cannot add '{id}' to the {kind} list"))?;
            }
        }

        Ok(session)
    }
}

fn parse_price_level(raw: &str) -> Result<PriceLevel, String> {
    let level: u8 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a price level; expected 1-4"))?;
    PriceLevel::try_from(level)
}
