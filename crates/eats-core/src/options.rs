//! Canonical selectable filter options.
//!
//! Call sites may describe options either as bare labels (cuisine names) or
//! as value/label pairs (distance thresholds). Both are converted into a
//! single [`FilterOption`] at the boundary.

use serde::{Deserialize, Serialize};

use crate::filters::FilterCriteria;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    /// A cuisine type.
    Text(String),
    /// A distance threshold in meters.
    Meters(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: OptionValue,
    pub label: String,
}

impl FilterOption {
    /// Whether this option is currently selected in `criteria`.
    #[must_use]
    pub fn is_selected(&self, criteria: &FilterCriteria) -> bool {
        match &self.value {
            OptionValue::Text(cuisine) => criteria.selected_cuisine_types.contains(cuisine),
            OptionValue::Meters(m) => criteria.selected_distance == Some(*m),
        }
    }

    /// Apply a press on this option: cuisines toggle in a multi-select set,
    /// distances toggle as a single selection.
    pub fn press(&self, criteria: &mut FilterCriteria) {
        match &self.value {
            OptionValue::Text(cuisine) => {
                criteria.toggle_cuisine(cuisine);
            }
            OptionValue::Meters(m) => criteria.select_distance(Some(*m)),
        }
    }
}

impl From<&str> for FilterOption {
    fn from(label: &str) -> Self {
        Self {
            value: OptionValue::Text(label.to_string()),
            label: label.to_string(),
        }
    }
}

impl From<String> for FilterOption {
    fn from(label: String) -> Self {
        Self {
            value: OptionValue::Text(label.clone()),
            label,
        }
    }
}

impl From<(&str, &str)> for FilterOption {
    fn from((value, label): (&str, &str)) -> Self {
        Self {
            value: OptionValue::Text(value.to_string()),
            label: label.to_string(),
        }
    }
}

impl From<(u32, &str)> for FilterOption {
    fn from((meters, label): (u32, &str)) -> Self {
        Self {
            value: OptionValue::Meters(meters),
            label: label.to_string(),
        }
    }
}

/// Convert any mix of option descriptions into canonical options.
pub fn normalize_options<I, T>(items: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = T>,
    T: Into<FilterOption>,
{
    items.into_iter().map(Into::into).collect()
}
