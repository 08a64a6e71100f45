//! Read-only commands: `list`, `map`, and `filters`.

use std::sync::Arc;

use eats_core::filters::{cuisine_options, distance_options};
use eats_core::{distance_label, AppConfig, Catalog, FilterCriteria, FilterOption, Restaurant};

use crate::pool_args::PoolArgs;

/// Format an optional distance for display, returning `"-"` when unknown.
pub(crate) fn fmt_distance(distance: Option<f64>) -> String {
    match distance.map(f64::round) {
        None => "-".to_string(),
        Some(m) if m < 1000.0 => format!("{m:.0}m"),
        Some(m) => format!("{:.1}km", m / 1000.0),
    }
}

pub(crate) fn run_list(
    config: &AppConfig,
    catalog: Arc<Catalog>,
    args: &PoolArgs,
) -> anyhow::Result<()> {
    let criteria = args.criteria()?;
    let session = args.session(catalog, config)?;
    let pool = session.pool(args.mode, &criteria);

    print_criteria_summary(&criteria);
    if pool.is_empty() {
        println!("找不到符合條件的餐廳");
        return Ok(());
    }

    println!("找到 {} 家餐廳", pool.len());
    for restaurant in &pool {
        println!("{}", list_row(restaurant, session.is_favorite(&restaurant.id)));
    }
    Ok(())
}

pub(crate) fn run_map(
    config: &AppConfig,
    catalog: Arc<Catalog>,
    args: &PoolArgs,
) -> anyhow::Result<()> {
    let criteria = args.criteria()?;
    let session = args.session(catalog, config)?;
    let listed = session.pool(eats_picker::PoolMode::All, &criteria).len();
    let pins = session.map_pool(&criteria);

    print_criteria_summary(&criteria);
    println!("地圖上顯示 {} 家餐廳", pins.len());
    for restaurant in &pins {
        if let Some((lat, lng)) = restaurant.coordinates() {
            println!(
                "{:>4}  {:<16} ({lat:.5}, {lng:.5})",
                restaurant.id, restaurant.name
            );
        }
    }

    let skipped = listed - pins.len();
    if skipped > 0 {
        tracing::debug!(skipped, "restaurants without coordinates left off the map");
        println!("另有 {skipped} 家餐廳沒有座標");
    }
    Ok(())
}

pub(crate) fn run_filters(catalog: &Catalog) {
    let available = catalog.cuisine_types();
    println!("料理類型：");
    print_options(&cuisine_options(&available));
    println!("距離：");
    print_options(&distance_options());
}

fn print_options(options: &[FilterOption]) {
    for option in options {
        println!("  {}", option.label);
    }
}

fn print_criteria_summary(criteria: &FilterCriteria) {
    let active = criteria.active_filter_count();
    if active == 0 && criteria.search_text.is_empty() {
        return;
    }

    let mut parts = Vec::new();
    if !criteria.search_text.is_empty() {
        parts.push(format!("搜尋「{}」", criteria.search_text));
    }
    if !criteria.selected_cuisine_types.is_empty() {
        let cuisines: Vec<&str> = criteria
            .selected_cuisine_types
            .iter()
            .map(String::as_str)
            .collect();
        parts.push(cuisines.join("、"));
    }
    if let Some(meters) = criteria.selected_distance {
        parts.push(distance_label(meters));
    }
    if let Some(range) = criteria.price_range {
        parts.push(format!("{}~{}", range.min(), range.max()));
    }
    println!("篩選條件（{active}）：{}", parts.join(" / "));
}

/// Fixed-width columns come first; CJK text goes last since `{:<n}` pads by
/// chars, not display width.
fn list_row(restaurant: &Restaurant, favorite: bool) -> String {
    let marker = if favorite { "♥" } else { " " };
    format!(
        "{marker}{:>4}  {:<4} ★{:.1} {:>7}  {}  {}",
        restaurant.id,
        restaurant.price_level,
        restaurant.rating,
        fmt_distance(restaurant.distance),
        restaurant.cuisine_type,
        restaurant.name,
    )
}
