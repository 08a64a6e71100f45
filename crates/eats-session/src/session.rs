use std::sync::Arc;

use eats_core::{Catalog, FilterCriteria, Restaurant};
use eats_picker::{build_pool, select_random, ListKind, ListState, PoolMode, RandomSource};

use crate::auth::AuthService;
use crate::error::SessionError;
use crate::profile::FriendRecommendation;

/// Counts shown next to the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    /// Restaurants the wheel can currently land on.
    pub available: usize,
    /// Ids on the blacklist, whether or not they pass the current filters.
    pub blacklisted: usize,
}

/// All state a view needs, threaded explicitly instead of held globally.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    lists: ListState,
    auth: AuthService,
}

impl Session {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, auth: AuthService) -> Self {
        Self {
            catalog,
            lists: ListState::new(),
            auth,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn lists(&self) -> &ListState {
        &self.lists
    }

    #[must_use]
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthService {
        &mut self.auth
    }

    /// Flip membership of `id` in the `kind` list.
    ///
    /// Returns `true` if the restaurant is on the list after the call.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRestaurant`] if `id` is not in the catalog.
    pub fn toggle(&mut self, kind: ListKind, id: &str) -> Result<bool, SessionError> {
        self.ensure_known(id)?;
        let present = self.lists.toggle(kind, id);
        tracing::debug!(restaurant_id = id, list = %kind, present, "toggled list membership");
        Ok(present)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRestaurant`] if `id` is not in the catalog.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, SessionError> {
        self.toggle(ListKind::Favorites, id)
    }

    /// Blacklisting leaves favorite and wheel-list membership untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRestaurant`] if `id` is not in the catalog.
    pub fn toggle_blacklist(&mut self, id: &str) -> Result<bool, SessionError> {
        self.toggle(ListKind::Blacklist, id)
    }

    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRestaurant`] if `id` is not in the catalog.
    pub fn toggle_wheel_list(&mut self, id: &str) -> Result<bool, SessionError> {
        self.toggle(ListKind::WheelList, id)
    }

    /// Put `id` on the `kind` list if it is not there already.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownRestaurant`] if `id` is not in the catalog.
    pub fn include(&mut self, kind: ListKind, id: &str) -> Result<(), SessionError> {
        self.ensure_known(id)?;
        if self.lists.insert(kind, id) {
            tracing::debug!(restaurant_id = id, list = %kind, "added to list");
        }
        Ok(())
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.lists.is_favorite(id)
    }

    #[must_use]
    pub fn pool(&self, mode: PoolMode, criteria: &FilterCriteria) -> Vec<&Restaurant> {
        build_pool(&self.catalog, &self.lists, criteria, mode)
    }

    /// The explore pool restricted to restaurants that can be placed on a map.
    #[must_use]
    pub fn map_pool(&self, criteria: &FilterCriteria) -> Vec<&Restaurant> {
        self.pool(PoolMode::All, criteria)
            .into_iter()
            .filter(|r| r.coordinates().is_some())
            .collect()
    }

    /// Pick a restaurant for the wheel from the current pool.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Picker`] wrapping `EmptyPool` when nothing is
    /// eligible; the caller should not animate a spin in that case.
    pub fn spin<S>(
        &self,
        mode: PoolMode,
        criteria: &FilterCriteria,
        source: &mut S,
    ) -> Result<&Restaurant, SessionError>
    where
        S: RandomSource + ?Sized,
    {
        let pool = self.pool(mode, criteria);
        let picked: &Restaurant = *select_random(&pool, source)?;
        tracing::info!(
            mode = %mode,
            pool_size = pool.len(),
            restaurant_id = %picked.id,
            "wheel landed"
        );
        Ok(picked)
    }

    #[must_use]
    pub fn stats(&self, mode: PoolMode, criteria: &FilterCriteria) -> PoolStats {
        PoolStats {
            available: self.pool(mode, criteria).len(),
            blacklisted: self.lists.blacklist().len(),
        }
    }

    /// The pocket list, without blacklisted entries.
    #[must_use]
    pub fn favorites(&self) -> Vec<&Restaurant> {
        self.pool(PoolMode::Favorites, &FilterCriteria::default())
    }

    /// The wheel candidates, without blacklisted entries.
    #[must_use]
    pub fn wheel_list(&self) -> Vec<&Restaurant> {
        self.pool(PoolMode::WheelList, &FilterCriteria::default())
    }

    #[must_use]
    pub fn blacklisted(&self) -> Vec<&Restaurant> {
        self.catalog
            .iter()
            .filter(|r| self.lists.is_blacklisted(&r.id))
            .collect()
    }

    /// Friend recommendations for the logged-in user, paired with their
    /// restaurants. Unknown and blacklisted ids are skipped.
    #[must_use]
    pub fn recommendations(&self) -> Vec<(&FriendRecommendation, &Restaurant)> {
        let Some(user) = self.auth.current_user() else {
            return Vec::new();
        };
        user.friend_recommendations
            .iter()
            .filter(|rec| !self.lists.is_blacklisted(&rec.restaurant_id))
            .filter_map(|rec| self.catalog.get(&rec.restaurant_id).map(|r| (rec, r)))
            .collect()
    }

    /// Log out. Curation lists belong to the session and outlive the user.
    pub fn logout(&mut self) {
        self.auth.logout();
    }

    fn ensure_known(&self, id: &str) -> Result<(), SessionError> {
        if self.catalog.contains(id) {
            Ok(())
        } else {
            Err(SessionError::UnknownRestaurant(id.to_string()))
        }
    }
}
