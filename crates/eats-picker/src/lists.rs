//! Per-session curation lists: favorites, blacklist, and the wheel list.
//!
//! The three sets are independent. Blacklisting an id does not remove it from
//! the other lists; the blacklist is enforced when a pool is built, so
//! un-blacklisting restores the id's earlier favorite and wheel-list status.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PickerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Favorites,
    Blacklist,
    WheelList,
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListKind::Favorites => write!(f, "favorites"),
            ListKind::Blacklist => write!(f, "blacklist"),
            ListKind::WheelList => write!(f, "wheel-list"),
        }
    }
}

impl FromStr for ListKind {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "favorites" | "favourites" => Ok(ListKind::Favorites),
            "blacklist" => Ok(ListKind::Blacklist),
            "wheel-list" | "wheel_list" | "wheel" => Ok(ListKind::WheelList),
            _ => Err(PickerError::InvalidListKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    favorites: BTreeSet<String>,
    blacklist: BTreeSet<String>,
    wheel_list: BTreeSet<String>,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id` in the `kind` list and leave the other lists
    /// untouched. Returns `true` if `id` is present after the call.
    pub fn toggle(&mut self, kind: ListKind, id: &str) -> bool {
        let set = self.set_mut(kind);
        if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        }
    }

    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        self.toggle(ListKind::Favorites, id)
    }

    pub fn toggle_blacklist(&mut self, id: &str) -> bool {
        self.toggle(ListKind::Blacklist, id)
    }

    pub fn toggle_wheel_list(&mut self, id: &str) -> bool {
        self.toggle(ListKind::WheelList, id)
    }

    /// Add `id` to `kind` without toggling. Returns `false` if it was already there.
    pub fn insert(&mut self, kind: ListKind, id: &str) -> bool {
        self.set_mut(kind).insert(id.to_string())
    }

    #[must_use]
    pub fn contains(&self, kind: ListKind, id: &str) -> bool {
        self.ids(kind).contains(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn is_blacklisted(&self, id: &str) -> bool {
        self.blacklist.contains(id)
    }

    #[must_use]
    pub fn in_wheel_list(&self, id: &str) -> bool {
        self.wheel_list.contains(id)
    }

    #[must_use]
    pub fn ids(&self, kind: ListKind) -> &BTreeSet<String> {
        match kind {
            ListKind::Favorites => &self.favorites,
            ListKind::Blacklist => &self.blacklist,
            ListKind::WheelList => &self.wheel_list,
        }
    }

    #[must_use]
    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    #[must_use]
    pub fn blacklist(&self) -> &BTreeSet<String> {
        &self.blacklist
    }

    #[must_use]
    pub fn wheel_list(&self) -> &BTreeSet<String> {
        &self.wheel_list
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
        self.blacklist.clear();
        self.wheel_list.clear();
    }

    fn set_mut(&mut self, kind: ListKind) -> &mut BTreeSet<String> {
        match kind {
            ListKind::Favorites => &mut self.favorites,
            ListKind::Blacklist => &mut self.blacklist,
            ListKind::WheelList => &mut self.wheel_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [ListKind; 3] = [ListKind::Favorites, ListKind::Blacklist, ListKind::WheelList];

    #[test]
    fn single_toggle_flips_membership() {
        for kind in ALL_KINDS {
            let mut lists = ListState::new();
            assert!(lists.toggle(kind, "7"));
            assert!(lists.contains(kind, "7"));
            assert!(!lists.toggle(kind, "7"));
            assert!(!lists.contains(kind, "7"));
        }
    }

    #[test]
    fn double_toggle_restores_previous_state() {
        let mut lists = ListState::new();
        lists.toggle_favorite("1");
        lists.toggle_wheel_list("2");
        lists.toggle_blacklist("3");
        let before = lists.clone();

        for kind in ALL_KINDS {
            for id in ["1", "2", "3", "4"] {
                lists.toggle(kind, id);
                lists.toggle(kind, id);
                assert_eq!(lists, before, "double toggle of {id} in {kind} changed state");
            }
        }
    }

    #[test]
    fn toggle_affects_only_its_own_list() {
        let mut lists = ListState::new();
        lists.toggle_favorite("1");
        assert!(lists.is_favorite("1"));
        assert!(!lists.is_blacklisted("1"));
        assert!(!lists.in_wheel_list("1"));
    }

    #[test]
    fn blacklisting_does_not_cascade_into_other_lists() {
        let mut lists = ListState::new();
        lists.toggle_favorite("1");
        lists.toggle_wheel_list("1");

        lists.toggle_blacklist("1");
        assert!(lists.is_blacklisted("1"));
        assert!(lists.is_favorite("1"));
        assert!(lists.in_wheel_list("1"));

        lists.toggle_blacklist("1");
        assert!(!lists.is_blacklisted("1"));
        assert!(lists.is_favorite("1"));
        assert!(lists.in_wheel_list("1"));
    }

    #[test]
    fn favorites_and_wheel_list_may_overlap() {
        let mut lists = ListState::new();
        lists.toggle_favorite("5");
        lists.toggle_wheel_list("5");
        assert!(lists.is_favorite("5") && lists.in_wheel_list("5"));
    }

    #[test]
    fn insert_is_not_a_toggle() {
        let mut lists = ListState::new();
        assert!(lists.insert(ListKind::WheelList, "1"));
        assert!(!lists.insert(ListKind::WheelList, "1"));
        assert!(lists.in_wheel_list("1"));
    }

    #[test]
    fn clear_empties_every_list() {
        let mut lists = ListState::new();
        lists.toggle_favorite("1");
        lists.toggle_blacklist("2");
        lists.toggle_wheel_list("3");
        lists.clear();
        assert_eq!(lists, ListState::default());
    }

    #[test]
    fn list_kind_parses_cli_spellings() {
        assert_eq!("favorites".parse::<ListKind>(), Ok(ListKind::Favorites));
        assert_eq!("Wheel-List".parse::<ListKind>(), Ok(ListKind::WheelList));
        assert_eq!("wheel_list".parse::<ListKind>(), Ok(ListKind::WheelList));
        assert!(matches!(
            "pantry".parse::<ListKind>(),
            Err(PickerError::InvalidListKind(ref s)) if s == "pantry"
        ));
    }

    #[test]
    fn list_state_serializes_as_sorted_id_arrays() {
        let mut lists = ListState::new();
        lists.toggle_favorite("4");
        lists.toggle_favorite("1");
        let json = serde_json::to_value(&lists).unwrap();
        assert_eq!(json["favorites"], serde_json::json!(["1", "4"]));
        assert_eq!(json["blacklist"], serde_json::json!([]));
    }
}
