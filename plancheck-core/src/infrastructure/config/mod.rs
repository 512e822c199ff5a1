pub mod settings;

pub use settings::{Settings, load_settings, load_settings_with};
