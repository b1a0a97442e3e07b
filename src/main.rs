use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use cn_noise::{regenerate_field, CellNoisePlugin, FieldSettings, NoiseField};
use cn_persistence::load_settings;
use std::path::PathBuf;

fn main() -> AppExit {
    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match load_settings(&path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                None
            }
        },
        None => Some(FieldSettings::default()),
    };
    let Some(settings) = settings else {
        return AppExit::error();
    };

    App::new()
        .add_plugins((
            MinimalPlugins.set(ScheduleRunnerPlugin::run_once()),
            LogPlugin::default(),
            CellNoisePlugin,
        ))
        .insert_resource(settings)
        .add_systems(Update, report_field.after(regenerate_field))
        .run()
}

/// Log a summary of the sampled field.
fn report_field(settings: Res<FieldSettings>, field: Res<NoiseField>) {
    let Some(stats) = field.stats() else {
        warn!("No noise field was sampled");
        return;
    };
    info!(
        "Sampled {}x{} {:?} cellular noise (frequency {}, tile {}, seed {}, {} levels)",
        field.resolution,
        field.resolution,
        settings.dimensions,
        settings.frequency,
        settings.tile_cells,
        settings.seed,
        settings.levels,
    );
    info!(
        "  min {:.4}  max {:.4}  mean {:.4}",
        stats.min, stats.max, stats.mean
    );
}
