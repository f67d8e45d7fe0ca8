// Settings service module
// Persists user preferences as a TOML file

mod service;

pub use service::SettingsService;
