//! The tessera binary: generate a world, replay taps, report.

use clap::Parser;
use tessera_app::{AppError, PlatformDirs, Session};
use tessera_config::{CliArgs, Config};
use tessera_math::Vec2;

fn main() {
    if let Err(e) = run() {
        tracing::error!("{e}");
        eprintln!("tessera: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let dirs = PlatformDirs::resolve()?.with_config_dir(args.config.as_deref());
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&args);

    tessera_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(
        config = %dirs.config_dir.display(),
        logs = %dirs.log_dir.display(),
        seed = %config.world.seed,
        "tessera starting"
    );

    let mut session = Session::new(&config)?;
    if config.debug.biome_summary {
        session.log_biome_summary();
    }

    let mut replaced = 0;
    for &(x, y) in &args.taps {
        if session.tap(Vec2::new(x, y))?.replaced.is_some() {
            replaced += 1;
        }
    }

    let player = session.controller().player();
    tracing::info!(
        taps = args.taps.len(),
        replaced,
        x = player.position().x,
        y = player.position().y,
        animation = %session.controller().animation(),
        "run complete"
    );

    if let Some(path) = &args.dump {
        let path = path.clone().unwrap_or_else(|| dirs.default_dump_path());
        session.dump_tiles(&path)?;
    }
    Ok(())
}
