use std::time::Duration;

use thiserror::Error;

pub const BOARD_WIDTH: usize = 30;
pub const BOARD_HEIGHT: usize = 30;
pub const GENERATIONS_PER_SECOND: u32 = 6;
pub const INITIAL_FILL: f32 = 0.5;
/// Generations the text driver runs when none are requested.
pub const GENERATIONS: u64 = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("unexpected extra argument {0:?}")]
    Unexpected(String),
}

/// Run settings for the text driver.
///
/// Read positionally as `[width] [height] [generations] [seed]`; anything
/// left out takes its default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub generations: u64,
    /// `None` seeds from the OS, so every run differs.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            generations: GENERATIONS,
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_args<I, S>(args: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut args = args.into_iter();

        if let Some(v) = args.next() {
            settings.width = parse("width", v.as_ref())?;
        }
        if let Some(v) = args.next() {
            settings.height = parse("height", v.as_ref())?;
        }
        if let Some(v) = args.next() {
            settings.generations = parse("generations", v.as_ref())?;
        }
        if let Some(v) = args.next() {
            settings.seed = Some(parse("seed", v.as_ref())?);
        }
        if let Some(v) = args.next() {
            return Err(SettingsError::Unexpected(v.as_ref().to_owned()));
        }
        Ok(settings)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / GENERATIONS_PER_SECOND
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, SettingsError> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::NotANumber {
            name,
            value: value.to_owned(),
        })
}
