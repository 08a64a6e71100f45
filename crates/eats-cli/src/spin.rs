//! The `spin` command: check the pool, run the wheel, reveal the result.
//!
//! The pick is made only when the wheel stops, so an empty pool is reported
//! before any animation starts.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use eats_core::{AppConfig, Catalog, Restaurant};
use eats_picker::{PickerError, RngSource};
use eats_session::SessionError;

use crate::browse::fmt_distance;
use crate::pool_args::PoolArgs;

const WHEEL_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
const FRAME_COUNT: u32 = 24;

pub(crate) async fn run_spin(
    config: &AppConfig,
    catalog: Arc<Catalog>,
    args: &PoolArgs,
    seed: Option<u64>,
    no_animation: bool,
) -> anyhow::Result<()> {
    let criteria = args.criteria()?;
    let session = args.session(catalog, config)?;

    let stats = session.stats(args.mode, &criteria);
    println!("可選餐廳：{} 家", stats.available);
    if stats.blacklisted > 0 {
        println!("已排除黑名單：{} 家", stats.blacklisted);
    }

    if stats.available == 0 {
        println!("{}", empty_pool_hint(args));
        return Ok(());
    }

    if !no_animation {
        animate(Duration::from_millis(config.spin_duration_ms)).await?;
    }

    let mut source = match seed.or(config.spin_seed) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            RngSource::seeded(seed)
        }
        None => RngSource::from_entropy(),
    };

    match session.spin(args.mode, &criteria, &mut source) {
        Ok(restaurant) => {
            print_result(restaurant, session.is_favorite(&restaurant.id));
            Ok(())
        }
        Err(SessionError::Picker(PickerError::EmptyPool)) => {
            println!("{}", empty_pool_hint(args));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Spin a text wheel for roughly `duration`.
async fn animate(duration: Duration) -> anyhow::Result<()> {
    if duration.is_zero() {
        return Ok(());
    }
    let frame = duration / FRAME_COUNT;
    let mut stdout = std::io::stdout();
    for (i, glyph) in WHEEL_FRAMES.iter().cycle().take(FRAME_COUNT as usize).enumerate() {
        write!(stdout, "\r轉盤轉動中 {glyph} ")?;
        stdout.flush()?;
        tracing::trace!(frame = i, "wheel frame");
        tokio::time::sleep(frame).await;
    }
    writeln!(stdout, "\r轉盤停下來了！   ")?;
    Ok(())
}

fn empty_pool_hint(args: &PoolArgs) -> &'static str {
    match args.mode {
        eats_picker::PoolMode::WheelList if args.wheel.is_empty() => {
            "轉盤清單是空的，先用 --wheel <id> 加入餐廳"
        }
        eats_picker::PoolMode::Favorites if args.favorites.is_empty() => {
            "口袋名單是空的，先用 --favorite <id> 加入餐廳"
        }
        _ => "沒有符合條件的餐廳，試著放寬篩選條件",
    }
}

fn print_result(restaurant: &Restaurant, favorite: bool) {
    println!();
    println!("今天就吃這家！");
    println!(
        "  {}{}",
        restaurant.name,
        if favorite { " ♥" } else { "" }
    );
    println!("  {}", restaurant.address);
    println!(
        "  {}  {}  ★{:.1}  {}",
        restaurant.cuisine_type,
        restaurant.price_level,
        restaurant.rating,
        fmt_distance(restaurant.distance)
    );
}
