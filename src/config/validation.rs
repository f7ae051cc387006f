//! Validation for widget config values.

use super::data::WidgetConfig;

/// A config field holding a value the motion model cannot use.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' = {} {}", self.field, self.value, self.reason)
    }
}

macro_rules! check_positive {
    ($errors:expr, $config:expr, $field:ident) => {
        if !($config.$field > 0.0) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $config.$field,
                reason: "must be positive",
            });
        }
    };
}

macro_rules! check_non_negative {
    ($errors:expr, $config:expr, $field:ident) => {
        if !($config.$field >= 0.0) {
            $errors.push(ValidationError {
                field: stringify!($field),
                value: $config.$field,
                reason: "must not be negative",
            });
        }
    };
}

/// Validate all numeric fields. Returns an empty list when the config is usable.
pub fn validate_config(config: &WidgetConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, config, walk_step);
    check_positive!(errors, config, walk_duration);
    check_positive!(errors, config, spring_stiffness);
    check_positive!(errors, config, spring_mass);
    // Undamped springs never come to rest
    check_positive!(errors, config, spring_damping);
    check_positive!(errors, config, rest_delta);
    check_positive!(errors, config, rest_speed);
    check_positive!(errors, config, character_size);
    check_positive!(errors, config, stage_max_width);
    check_positive!(errors, config, stage_aspect);

    check_non_negative!(errors, config, edge_margin);
    check_non_negative!(errors, config, resume_walk_delay);
    check_non_negative!(errors, config, floor_inset);
    check_non_negative!(errors, config, stage_min_height);
    check_non_negative!(errors, config, page_padding);
    check_non_negative!(errors, config, ground_height);

    errors
}
