mod service;

pub use service::{SettingsError, SettingsService, CONFIG_ENV};
