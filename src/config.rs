use serde::Deserialize;

/// Controller configuration.
///
/// All values carry defaults so an absent or partial configuration file is
/// not an error. Values are validated on load; the kinematic model breaks
/// down for a non-positive link length.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of each of the three arm links, in source units.
    pub link_length: f64,
    /// Damping constant for the least-squares solve.
    pub damping: f64,
    /// Gain applied to the broadcast orientation error.
    pub orientation_gain: f64,
    /// Control tick interval in milliseconds.
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            link_length: crate::consts::DEFAULT_LINK_LENGTH,
            damping: crate::consts::DEFAULT_DAMPING,
            orientation_gain: crate::consts::DEFAULT_ORIENTATION_GAIN,
            tick_interval_ms: crate::consts::CONTROL_PIPELINE_INTERVAL.as_millis() as u64,
        }
    }
}

impl Config {
    /// Read configuration from the first path that exists.
    ///
    /// When none of the given paths exist the default configuration is
    /// returned. A file that exists but does not parse or validate is an
    /// error.
    pub fn try_from_file<T: AsRef<std::path::Path>>(paths: Vec<T>) -> std::io::Result<Self> {
        use std::io::{Error, ErrorKind};

        for path in paths {
            if path.as_ref().exists() {
                let config: Self = toml::from_str(&std::fs::read_to_string(path)?)
                    .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;

                return config.validate().map_err(|e| {
                    Error::new(ErrorKind::InvalidInput, format!("configuration: {}", e))
                });
            }
        }

        Ok(Self::default())
    }

    fn validate(self) -> Result<Self, &'static str> {
        if self.link_length <= 0.0 {
            return Err("link length must be positive");
        }
        if self.damping < 0.0 {
            return Err("damping must not be negative");
        }
        if self.tick_interval_ms == 0 {
            return Err("tick interval must be positive");
        }

        Ok(self)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Link length: {:.1}; Damping: {:.1}; Orientation gain: {:.1}; Tick interval: {}ms",
            self.link_length, self.damping, self.orientation_gain, self.tick_interval_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();

        assert_eq!(config.link_length, 60.0);
        assert_eq!(config.damping, 10.0);
        assert_eq!(config.orientation_gain, 2.0);
        assert_eq!(config.tick_interval_ms, 10);
    }

    #[test]
    fn test_config_partial_toml() {
        let config: Config = toml::from_str("link_length = 45.5").unwrap();

        assert_eq!(config.link_length, 45.5);
        assert_eq!(config.damping, 10.0);
    }

    #[test]
    fn test_config_validate() {
        let config = Config {
            link_length: -1.0,
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
