//! Config domain: widget tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CharacterShape, WidgetConfig};
pub use loader::{ConfigLoadError, load_widget_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

/// Default location of the widget config, relative to the working directory.
pub const WIDGET_CONFIG_PATH: &str = "assets/data/widget.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(resolve_config(Path::new(WIDGET_CONFIG_PATH)));
    }
}

/// Load and validate the config, falling back to defaults on any failure.
pub(crate) fn resolve_config(path: &Path) -> WidgetConfig {
    let config = match load_widget_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default widget config", e);
            return WidgetConfig::default();
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid widget config: {}", error);
        }
        return WidgetConfig::default();
    }

    info!(
        "Loaded widget config from {}: shape={:?}, walk_step={}, walk_duration={}s",
        path.display(),
        config.shape,
        config.walk_step,
        config.walk_duration
    );
    config
}
