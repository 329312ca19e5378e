pub mod randomizer;
pub use randomizer::{entropy_rng, generate_seed, seeded_rng};

pub mod settings;
pub use settings::{Settings, SettingsError};
