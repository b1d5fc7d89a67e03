use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{NereisError, Result};

/// Separator between longitude and latitude in a coordinate key.
pub const COORDINATE_SEPARATOR: char = '_';

/// Canonical "lon_lat" string encoding of a sampling location.
///
/// Keys are produced by the external pipeline; they are carried
/// verbatim and only decoded back into floats for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordinateKey(String);

impl CoordinateKey {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self(format!("{}{}{}", longitude, COORDINATE_SEPARATOR, latitude))
    }

    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into (longitude, latitude).
    pub fn decode(&self) -> Result<(f64, f64)> {
        let (lon, lat) = self
            .0
            .split_once(COORDINATE_SEPARATOR)
            .ok_or_else(|| {
                NereisError::InvalidInput(format!("coordinate key '{}' has no separator", self.0))
            })?;
        let longitude = lon.parse::<f64>().map_err(|_| {
            NereisError::InvalidInput(format!("coordinate key '{}': bad longitude", self.0))
        })?;
        let latitude = lat.parse::<f64>().map_err(|_| {
            NereisError::InvalidInput(format!("coordinate key '{}': bad latitude", self.0))
        })?;
        Ok((longitude, latitude))
    }
}

impl fmt::Display for CoordinateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
