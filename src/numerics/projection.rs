// src/numerics/projection.rs
// Projection setup: typed perspective parameters and their string form.

use std::collections::HashMap;
use std::str::FromStr;

use crate::numerics::error::NumericsError;
use crate::numerics::types::matrix4::Matrix4x4;
use crate::numerics::types::traits::FloatingPoint;

/// Split a `key=value,key=value` parameter string into a map.
///
/// Keys and values are trimmed and empty entries are skipped. An entry with
/// no `=` maps to an empty value, which the typed parsers then reject. A key
/// that appears more than once keeps its last value.
pub fn parse_parameters(parameters: &str) -> HashMap<String, String> {
    parameters
        .split(',')
        .map(|entry| entry.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (entry.to_string(), String::new()),
        })
        .collect()
}

/// Parameters of a right-handed perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveConfig<T: FloatingPoint = f32> {
    /// Vertical field of view
    pub fov_y_radians: T,
    /// Viewport width divided by height
    pub aspect: T,
    pub near: T,
    pub far: T,
}

impl<T: FloatingPoint> Default for PerspectiveConfig<T> {
    fn default() -> Self {
        Self {
            fov_y_radians: T::from_f64(60.0).to_radians(),
            aspect: T::from_f64(16.0 / 9.0),
            near: T::from_f64(0.1),
            far: T::from_f64(100.0),
        }
    }
}

impl<T: FloatingPoint> PerspectiveConfig<T> {
    /// Parse configuration from parameter string
    ///
    /// Supported keys are `fov` (vertical, in degrees), `aspect`, `near` and
    /// `far`, e.g. `"fov=75,aspect=1.5,near=0.01,far=500"`. Missing keys keep
    /// their default value.
    pub fn from_parameters(parameters: &str) -> Result<Self, NumericsError>
    where
        T: FromStr,
    {
        let params = parse_parameters(parameters);
        let mut config = Self::default();

        // Validate unsupported parameters
        let supported_params = ["fov", "aspect", "near", "far"];
        for key in params.keys() {
            if !supported_params.contains(&key.as_str()) {
                tracing::warn!(key = %key, "unsupported projection parameter");
                return Err(NumericsError::InvalidParameters(
                    format!("Unsupported parameter: {}", key)
                ));
            }
        }

        if let Some(fov) = params.get("fov") {
            config.fov_y_radians = parse_value::<T>("fov", fov)?.to_radians();
        }
        if let Some(aspect) = params.get("aspect") {
            config.aspect = parse_value("aspect", aspect)?;
        }
        if let Some(near) = params.get("near") {
            config.near = parse_value("near", near)?;
        }
        if let Some(far) = params.get("far") {
            config.far = parse_value("far", far)?;
        }

        config.validate()?;
        tracing::debug!(?config, "parsed perspective configuration");
        Ok(config)
    }

    /// Check the ranges a usable projection needs. NaN and infinities fail,
    /// including values that overflow the precision while parsing.
    pub fn validate(&self) -> Result<(), NumericsError> {
        let zero = T::zero();
        let half_turn = T::from_f64(core::f64::consts::PI);

        let problem = if !(self.fov_y_radians > zero && self.fov_y_radians < half_turn) {
            Some("fov must be between 0 and 180 degrees")
        } else if !(self.aspect > zero && self.aspect.is_finite()) {
            Some("aspect must be positive and finite")
        } else if !(self.near > zero && self.near.is_finite()) {
            Some("near must be positive and finite")
        } else if !self.far.is_finite() {
            Some("far must be finite")
        } else if !(self.far > self.near) {
            Some("far must be greater than near")
        } else {
            None
        };

        match problem {
            Some(message) => {
                tracing::warn!(config = ?self, reason = message, "rejected perspective configuration");
                Err(NumericsError::InvalidParameters(message.to_string()))
            }
            None => Ok(()),
        }
    }

    /// Build the projection matrix for this configuration.
    pub fn to_matrix(&self) -> Matrix4x4<T> {
        Matrix4x4::perspective(self)
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, NumericsError> {
    raw.parse::<T>().map_err(|_| {
        tracing::warn!(key = key, raw = raw, "unparsable projection parameter");
        NumericsError::InvalidParameters(format!("Invalid {} value: {}", key, raw))
    })
}
