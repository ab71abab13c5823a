pub mod impact;
pub mod settings;

pub use impact::ImpactPage;
pub use settings::SettingsPage;
