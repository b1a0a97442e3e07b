use bevy::prelude::*;

pub mod field;
pub mod fractal;
pub mod grid;
pub mod progress;
pub mod strategy;
pub mod worley;

pub use field::{Dimensions, FieldSettings, FieldStats, NoiseField};
pub use fractal::Octaves;
pub use grid::Lattice;
pub use progress::FieldProgress;
pub use strategy::CellularStrategy;
pub use worley::WorleyNoise;

/// Cellular noise plugin.
/// Keeps the `NoiseField` resource in sync with `FieldSettings`.
pub struct CellNoisePlugin;

impl Plugin for CellNoisePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FieldSettings>()
            .init_resource::<NoiseField>()
            .add_systems(
                Update,
                regenerate_field.run_if(resource_changed::<FieldSettings>),
            );
    }
}

/// Resample the field after the settings change.
pub fn regenerate_field(settings: Res<FieldSettings>, mut field: ResMut<NoiseField>) {
    match NoiseField::generate(&settings, None) {
        Ok(sampled) => *field = sampled,
        Err(e) => error!("Keeping previous noise field, settings are invalid: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_samples_field_on_first_update() {
        let mut app = App::new();
        app.add_plugins(CellNoisePlugin);
        app.update();

        let field = app.world().resource::<NoiseField>();
        assert_eq!(field.resolution, 64);
        assert_eq!(field.values.len(), 64 * 64);
    }

    #[test]
    fn plugin_resamples_after_settings_change() {
        let mut app = App::new();
        app.add_plugins(CellNoisePlugin);
        app.update();

        app.world_mut().resource_mut::<FieldSettings>().resolution = 16;
        app.update();
        assert_eq!(app.world().resource::<NoiseField>().values.len(), 16 * 16);

        // Invalid settings leave the last good field in place.
        app.world_mut().resource_mut::<FieldSettings>().levels = 0;
        app.update();
        assert_eq!(app.world().resource::<NoiseField>().values.len(), 16 * 16);
    }
}
