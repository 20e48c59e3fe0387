//! Application configuration and command line parsing

use thiserror::Error;

use crate::scene::{Handedness, OrbitSettings, OrbitState};

/// Configuration error type
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
    #[error("Invalid window size {0}x{1}")]
    InvalidWindowSize(u32, u32),
    #[error("Invalid {name} range: [{min}, {max}]")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("Sensitivity {name} must be positive, got {value}")]
    InvalidSensitivity { name: &'static str, value: f32 },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration for the lighting box application
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Coordinate convention for view and projection
    pub handedness: Handedness,
    /// Starting orbit
    pub orbit: OrbitState,
    /// Orbit clamps and drag sensitivities
    pub orbit_settings: OrbitSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Lighting Box Demo".to_string(),
            width: 800,
            height: 600,
            handedness: Handedness::Left,
            orbit: OrbitState::default(),
            orbit_settings: OrbitSettings::default(),
        }
    }
}

impl AppConfig {
    /// Build a configuration from command line arguments (without the
    /// program name).
    ///
    /// Supported flags: `--width <px>`, `--height <px>`, `--title <text>`,
    /// `--radius <units>`, `--handedness <lh|rh>`.
    pub fn from_args<I, S>(args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| ConfigError::MissingValue(flag.clone()));
            match flag.as_str() {
                "--width" => config.width = parse_value(&flag, value()?)?,
                "--height" => config.height = parse_value(&flag, value()?)?,
                "--title" => config.title = value()?,
                "--radius" => config.orbit.radius = parse_value(&flag, value()?)?,
                "--handedness" => {
                    let raw = value()?;
                    config.handedness = match raw.to_lowercase().as_str() {
                        "lh" | "left" => Handedness::Left,
                        "rh" | "right" => Handedness::Right,
                        _ => {
                            return Err(ConfigError::InvalidValue {
                                flag: flag.clone(),
                                value: raw,
                            })
                        }
                    };
                }
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Check window size, starting orbit and orbit settings
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidWindowSize(self.width, self.height));
        }
        validate_orbit_state(&self.orbit)?;
        validate_orbit_settings(&self.orbit_settings)
    }
}

/// Reject a starting orbit with non-finite components.
///
/// Clamping cannot repair NaN, so it has to be caught here.
pub fn validate_orbit_state(state: &OrbitState) -> ConfigResult<()> {
    let components = [
        ("azimuth", state.azimuth),
        ("polar", state.polar),
        ("--radius", state.radius),
    ];
    for (flag, value) in components {
        if !value.is_finite() {
            return Err(ConfigError::InvalidValue {
                flag: flag.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

/// Reject empty or inverted clamp ranges and non-positive sensitivities
pub fn validate_orbit_settings(settings: &OrbitSettings) -> ConfigResult<()> {
    let ranges = [
        ("polar", settings.min_polar, settings.max_polar),
        ("radius", settings.min_radius, settings.max_radius),
    ];
    for (name, min, max) in ranges {
        // NaN fails this comparison too
        if !(min < max) || !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::InvalidRange { name, min, max });
        }
    }

    let sensitivities = [
        ("angle_per_pixel", settings.angle_per_pixel),
        ("zoom_per_pixel", settings.zoom_per_pixel),
    ];
    for (name, value) in sensitivities {
        if !(value > 0.0) || !value.is_finite() {
            return Err(ConfigError::InvalidSensitivity { name, value });
        }
    }

    Ok(())
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: String) -> ConfigResult<T> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}
