use serde::{Deserialize, Serialize};
use crate::core::time::TimeScale;
use crate::error::ConfigError;
use crate::extensions::easing::Easing;
use crate::extensions::interpolator::Interpolator;
use crate::extensions::lerp::Lerp;

/// Tunable parameters for an interpolation run, loadable from JSON so
/// designers can tweak feel without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LerpSettings {
    /// Progress per second (default: 1.0, i.e. one second end to end).
    #[serde(default = "default_rate")]
    pub rate: f32,
    /// Clock to advance with (default: scaled).
    #[serde(default)]
    pub time_scale: TimeScale,
    /// Easing curve (default: linear).
    #[serde(default)]
    pub easing: Easing,
}

fn default_rate() -> f32 {
    1.0
}

impl Default for LerpSettings {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            time_scale: TimeScale::Scaled,
            easing: Easing::Linear,
        }
    }
}

impl LerpSettings {
    /// Parse settings from a JSON string. Rejects rates that would never finish.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate.is_finite() && self.rate > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidRate(self.rate))
        }
    }

    /// Settings for a run that takes `seconds` to finish.
    pub fn over(seconds: f32) -> Self {
        Self {
            rate: 1.0 / seconds,
            ..Self::default()
        }
    }

    pub fn build<T: Lerp>(&self, from: T, to: T) -> Interpolator<T> {
        Interpolator::new(from, to, self.rate)
            .with_time_scale(self.time_scale)
            .with_easing(self.easing)
    }
}
