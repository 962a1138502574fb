//! Playback engine configuration.

use crate::{Error, Result};

/// Configuration for the playback engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Interval between clock ticks, in seconds.
    pub tick_interval: f64,
    /// Delay before the clock resumes after a navigation command, in seconds.
    /// Gives the presentation layer time to finish its transition animation
    /// before the countdown starts affecting displayed state.
    pub resume_delay: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: 0.1,
            resume_delay: 0.3,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.tick_interval.is_finite() || self.tick_interval <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tick_interval {} must be positive",
                self.tick_interval
            )));
        }
        if !self.resume_delay.is_finite() || self.resume_delay < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "resume_delay {} must be non-negative",
                self.resume_delay
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.tick_interval, 0.1);
        assert_eq!(config.resume_delay, 0.3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let config = EngineConfig {
            tick_interval: 0.0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = EngineConfig {
            resume_delay: -0.1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
