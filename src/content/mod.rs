//! Content domain: gameplay tuning loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    ControllerDefaults, GameplayDefaults, MotorDefaults, PhysicsDefaults, RaceDefaults,
    SUPPORTED_SCHEMA_VERSION, Vec2Def,
};
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_gameplay_defaults};
pub use validation::{ValidationError, validate_gameplay_defaults};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

/// Tuning file read at startup, relative to the working directory.
pub const GAMEPLAY_DEFAULTS_PATH: &str = "assets/data/gameplay_defaults.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load and validate the tuning file, falling back to built-in defaults on
/// any error, then install the runtime resources.
fn load_content(mut commands: Commands) {
    let defaults = match load_and_validate(Path::new(GAMEPLAY_DEFAULTS_PATH)) {
        Ok(defaults) => {
            info!(
                "Gameplay defaults loaded (schema v{}): gravity={:?}, box={:?}, jump_height={}, best_times={}",
                defaults.schema_version,
                defaults.gravity(),
                Vec2::from(defaults.controller.size),
                defaults.motor.jump_height,
                defaults.race.best_times_capacity
            );
            defaults
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!(
                "Using built-in gameplay defaults after {} content error(s)",
                errors.len()
            );
            GameplayDefaults::default()
        }
    };

    commands.insert_resource(Gravity(defaults.gravity()));
    commands.insert_resource(defaults.controller_settings());
    commands.insert_resource(defaults.motor_tuning());
    commands.insert_resource(defaults.race_settings());
    commands.insert_resource(defaults);
}

/// Load a tuning file and validate it, collecting every problem as a message.
pub fn load_and_validate(path: &Path) -> Result<GameplayDefaults, Vec<String>> {
    let defaults = load_gameplay_defaults(path).map_err(|e| vec![e.to_string()])?;

    let errors = validate_gameplay_defaults(&defaults);
    if errors.is_empty() {
        Ok(defaults)
    } else {
        Err(errors
            .iter()
            .map(|e| format!("Invalid {}: {}", path.display(), e))
            .collect())
    }
}
