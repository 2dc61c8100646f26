// YAML-backed interpolation settings

mod yml_settings;

pub use yml_settings::{InterpolationSettings, ScalarValue};
