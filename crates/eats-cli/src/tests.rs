use eats_picker::PoolMode;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["eats-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn spin_defaults_to_all_mode_with_animation() {
    let cli = Cli::try_parse_from(["eats-cli", "spin"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Spin {
            pool: PoolArgs {
                mode: PoolMode::All,
                ..
            },
            seed: None,
            no_animation: false,
        })
    ));
}

#[test]
fn spin_accepts_seed_and_no_animation() {
    let cli = Cli::try_parse_from([
        "eats-cli",
        "spin",
        "--mode",
        "wheel-list",
        "--wheel",
        "1",
        "--wheel",
        "2",
        "--seed",
        "42",
        "--no-animation",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Spin {
            pool: PoolArgs {
                mode: PoolMode::WheelList,
                ref wheel,
                ..
            },
            seed: Some(42),
            no_animation: true,
        }) if wheel == &["1", "2"]
    ));
}

#[test]
fn list_collects_repeated_cuisines() {
    let cli = Cli::try_parse_from([
        "eats-cli",
        "list",
        "--cuisine",
        "小吃",
        "--cuisine",
        "日式料理",
        "--max-distance",
        "1000",
        "--search",
        "拉麵",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::List {
            pool: PoolArgs {
                ref cuisines,
                max_distance: Some(1000),
                ref search,
                ..
            }
        }) if cuisines.len() == 2 && search == "拉麵"
    ));
}

#[test]
fn map_accepts_blacklist_ids() {
    let cli = Cli::try_parse_from(["eats-cli", "map", "--blacklist", "3"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Map {
            pool: PoolArgs { ref blacklist, .. }
        }) if blacklist == &["3"]
    ));
}

#[test]
fn filters_takes_no_arguments() {
    let cli = Cli::try_parse_from(["eats-cli", "filters"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Filters)));
    assert!(Cli::try_parse_from(["eats-cli", "filters", "--mode", "all"]).is_err());
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(Cli::try_parse_from(["eats-cli", "spin", "--mode", "everything"]).is_err());
}

#[test]
fn price_flags_outside_one_to_four_are_rejected() {
    assert!(Cli::try_parse_from(["eats-cli", "list", "--min-price", "0"]).is_err());
    assert!(Cli::try_parse_from(["eats-cli", "list", "--max-price", "5"]).is_err());
    assert!(Cli::try_parse_from(["eats-cli", "list", "--min-price", "2"]).is_ok());
}

#[test]
fn only_production_uses_compact_logs() {
    assert!(uses_compact_logs(&Environment::Production));
    assert!(!uses_compact_logs(&Environment::Development));
    assert!(!uses_compact_logs(&Environment::Test));
}
