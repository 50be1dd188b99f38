//! Tunable parameters of the cleaning policy and their loaders.

use std::env;
use std::f64::consts::PI;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;

/// How the randomly sampled rotation angle is turned into a rotation time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationTiming {
    /// `|angle| / |angular_speed|`. Every rotation lasts a non-negative time.
    #[default]
    Absolute,
    /// `angle / angular_speed`. A negative angle yields a negative threshold,
    /// so the rotation finishes on its first tick.
    Signed,
}

impl fmt::Display for RotationTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationTiming::Absolute => f.write_str("absolute"),
            RotationTiming::Signed => f.write_str("signed"),
        }
    }
}

impl FromStr for RotationTiming {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(RotationTiming::Absolute),
            "signed" => Ok(RotationTiming::Signed),
            other => Err(ConfigError::UnknownRotationTiming(other.to_owned())),
        }
    }
}

/// Errors raised by [`RoombaConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("angular_speed must not be zero")]
    ZeroAngularSpeed,

    #[error("unknown rotation timing `{0}` (expected `absolute` or `signed`)")]
    UnknownRotationTiming(String),
}

/// Cleaning policy parameters shared by every node and state.
///
/// Times are in seconds, linear speeds in m/s, angular speeds in rad/s and
/// lengths in metres.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoombaConfig {
    /// Duration of one controller tick.
    pub sample_time: f64,
    pub forward_speed: f64,
    /// Speed used while backing up; negative means backwards.
    pub backward_speed: f64,
    pub angular_speed: f64,
    pub move_forward_time: f64,
    pub move_in_spiral_time: f64,
    pub go_back_time: f64,
    pub initial_radius_spiral: f64,
    /// Spiral radius growth rate (m/s).
    pub spiral_factor: f64,
    pub rotation_timing: RotationTiming,
    /// Seed for the rotation angle sampler. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl RoombaConfig {
    pub const DEFAULT_SAMPLE_TIME: f64 = 0.01;
    pub const DEFAULT_FORWARD_SPEED: f64 = 0.5;
    pub const DEFAULT_BACKWARD_SPEED: f64 = -0.1;
    pub const DEFAULT_ANGULAR_SPEED: f64 = PI / 4.0;
    pub const DEFAULT_MOVE_FORWARD_TIME: f64 = 3.0;
    pub const DEFAULT_MOVE_IN_SPIRAL_TIME: f64 = 20.0;
    pub const DEFAULT_GO_BACK_TIME: f64 = 0.5;
    pub const DEFAULT_INITIAL_RADIUS_SPIRAL: f64 = 0.2;
    pub const DEFAULT_SPIRAL_FACTOR: f64 = 0.05;

    pub const fn new() -> Self {
        Self {
            sample_time: Self::DEFAULT_SAMPLE_TIME,
            forward_speed: Self::DEFAULT_FORWARD_SPEED,
            backward_speed: Self::DEFAULT_BACKWARD_SPEED,
            angular_speed: Self::DEFAULT_ANGULAR_SPEED,
            move_forward_time: Self::DEFAULT_MOVE_FORWARD_TIME,
            move_in_spiral_time: Self::DEFAULT_MOVE_IN_SPIRAL_TIME,
            go_back_time: Self::DEFAULT_GO_BACK_TIME,
            initial_radius_spiral: Self::DEFAULT_INITIAL_RADIUS_SPIRAL,
            spiral_factor: Self::DEFAULT_SPIRAL_FACTOR,
            rotation_timing: RotationTiming::Absolute,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rotation_timing(mut self, timing: RotationTiming) -> Self {
        self.rotation_timing = timing;
        self
    }

    /// Elapsed time after `ticks` executions.
    #[inline]
    pub fn elapsed(&self, ticks: u32) -> f64 {
        f64::from(ticks) * self.sample_time
    }

    /// Time needed to turn through `angle` radians.
    pub fn rotation_duration(&self, angle: f64) -> f64 {
        match self.rotation_timing {
            RotationTiming::Absolute => (angle / self.angular_speed).abs(),
            RotationTiming::Signed => angle / self.angular_speed,
        }
    }

    /// Checks that every parameter is usable by the controllers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            ("sample_time", self.sample_time),
            ("forward_speed", self.forward_speed),
            ("backward_speed", self.backward_speed),
            ("angular_speed", self.angular_speed),
            ("move_forward_time", self.move_forward_time),
            ("move_in_spiral_time", self.move_in_spiral_time),
            ("go_back_time", self.go_back_time),
            ("initial_radius_spiral", self.initial_radius_spiral),
            ("spiral_factor", self.spiral_factor),
        ];
        if let Some((field, _)) = all.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NonFinite { field: *field });
        }

        for (field, value) in [
            ("sample_time", self.sample_time),
            ("move_forward_time", self.move_forward_time),
            ("move_in_spiral_time", self.move_in_spiral_time),
            ("go_back_time", self.go_back_time),
            ("initial_radius_spiral", self.initial_radius_spiral),
            ("spiral_factor", self.spiral_factor),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.angular_speed == 0.0 {
            return Err(ConfigError::ZeroAngularSpeed);
        }

        Ok(())
    }

    /// Overrides fields from process environment variables.
    ///
    /// Environment variables:
    /// - `ROOMBA_SAMPLE_TIME`, `ROOMBA_FORWARD_SPEED`, `ROOMBA_BACKWARD_SPEED`,
    ///   `ROOMBA_ANGULAR_SPEED`, `ROOMBA_MOVE_FORWARD_TIME`,
    ///   `ROOMBA_MOVE_IN_SPIRAL_TIME`, `ROOMBA_GO_BACK_TIME`,
    ///   `ROOMBA_INITIAL_RADIUS_SPIRAL`, `ROOMBA_SPIRAL_FACTOR` - numeric overrides
    /// - `ROOMBA_ROTATION_TIMING` - `absolute` or `signed`
    /// - `ROOMBA_SEED` - seed for the rotation sampler
    ///
    /// Unparseable values are ignored.
    pub fn apply_env(mut self) -> Self {
        let numeric: [(&str, &mut f64); 9] = [
            ("ROOMBA_SAMPLE_TIME", &mut self.sample_time),
            ("ROOMBA_FORWARD_SPEED", &mut self.forward_speed),
            ("ROOMBA_BACKWARD_SPEED", &mut self.backward_speed),
            ("ROOMBA_ANGULAR_SPEED", &mut self.angular_speed),
            ("ROOMBA_MOVE_FORWARD_TIME", &mut self.move_forward_time),
            ("ROOMBA_MOVE_IN_SPIRAL_TIME", &mut self.move_in_spiral_time),
            ("ROOMBA_GO_BACK_TIME", &mut self.go_back_time),
            ("ROOMBA_INITIAL_RADIUS_SPIRAL", &mut self.initial_radius_spiral),
            ("ROOMBA_SPIRAL_FACTOR", &mut self.spiral_factor),
        ];
        for (key, field) in numeric {
            if let Some(value) = read_env::<f64>(key) {
                *field = value;
            }
        }

        if let Some(timing) = read_env::<RotationTiming>("ROOMBA_ROTATION_TIMING") {
            self.rotation_timing = timing;
        }
        if let Some(seed) = read_env::<u64>("ROOMBA_SEED") {
            self.seed = Some(seed);
        }

        self
    }
}

impl Default for RoombaConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Loader for [`RoombaConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config from a TOML file.
    ///
    /// Missing fields take their default values.
    pub fn load(path: &Path) -> anyhow::Result<RoombaConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse and validate a config from TOML text.
    pub fn parse(content: &str) -> anyhow::Result<RoombaConfig> {
        let config: RoombaConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RoombaConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = RoombaConfig {
            sample_time: 0.0,
            ..RoombaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "sample_time",
                value: 0.0
            })
        );

        let config = RoombaConfig {
            angular_speed: 0.0,
            ..RoombaConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAngularSpeed));

        let config = RoombaConfig {
            go_back_time: -1.0,
            ..RoombaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "go_back_time",
                ..
            })
        ));

        let config = RoombaConfig {
            go_back_time: 0.0,
            ..RoombaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "go_back_time",
                value: 0.0
            })
        );

        let config = RoombaConfig {
            move_forward_time: 0.0,
            move_in_spiral_time: 0.0,
            ..RoombaConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "move_forward_time",
                ..
            })
        ));

        let config = RoombaConfig {
            forward_speed: f64::NAN,
            ..RoombaConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFinite {
                field: "forward_speed"
            })
        );
    }

    #[test]
    fn rotation_duration_follows_timing_policy() {
        let config = RoombaConfig {
            angular_speed: 2.0,
            ..RoombaConfig::default()
        };
        assert_eq!(config.rotation_duration(-1.0), 0.5);
        assert_eq!(config.rotation_duration(1.0), 0.5);

        let signed = config.with_rotation_timing(RotationTiming::Signed);
        assert_eq!(signed.rotation_duration(-1.0), -0.5);
        assert_eq!(signed.rotation_duration(1.0), 0.5);
    }

    #[test]
    fn parse_fills_missing_fields_with_defaults() {
        let config = ConfigLoader::parse(
            r#"
            sample_time = 0.1
            rotation_timing = "signed"
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.sample_time, 0.1);
        assert_eq!(config.rotation_timing, RotationTiming::Signed);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.forward_speed, RoombaConfig::DEFAULT_FORWARD_SPEED);
    }

    #[test]
    fn parse_rejects_unknown_fields_and_invalid_values() {
        assert!(ConfigLoader::parse("sample_tim = 0.1").is_err());
        assert!(ConfigLoader::parse("sample_time = -0.1").is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "go_back_time = 1.5").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.go_back_time, 1.5);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ConfigLoader::load(Path::new("/nonexistent/roomba.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn rotation_timing_parses_case_insensitively() {
        assert_eq!("Signed".parse::<RotationTiming>(), Ok(RotationTiming::Signed));
        assert_eq!(" absolute ".parse::<RotationTiming>(), Ok(RotationTiming::Absolute));
        assert!("sideways".parse::<RotationTiming>().is_err());
    }
}
