//! Observational inputs for a spectral-line cube header.
//!
//! All sky quantities share one angular unit, nominally degrees. Frequencies
//! are in Hz.

use crate::error::{HeaderError, HeaderResult};
use crate::projection::CubeProjection;

fn default_projection() -> String {
    CubeProjection::default().code().to_string()
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObservationalParameters {
    /// Sky position of the image center, `[x, y]`.
    pub center: [f64; 2],
    /// Pixel dimensions of the sky plane, `[x, y]`.
    pub size: [usize; 2],
    /// Angular size of one pixel.
    pub pixel_scale: f64,
    /// Native coordinate identifiers of each sky axis, e.g. `["RA", "DEC"]`.
    pub coord_type: [String; 2],
    /// Celestial reference frame; empty means not recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub radesys: String,
    /// Epoch of the reference frame; `None` or non-positive means not recorded.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equinox: Option<f64>,
    /// Rest frequency of the line. Non-positive means unknown.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rest_frequency: f64,
    /// Channel center frequencies, strictly monotonic.
    pub frequency_axis: Vec<f64>,
    /// Carried for callers that record the beam elsewhere; no keyword derives from it.
    #[cfg_attr(feature = "serde", serde(default))]
    pub beam_fwhm: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub velocity_definition: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spectral_system: String,
    #[cfg_attr(feature = "serde", serde(default = "default_projection"))]
    pub projection: String,
}

impl ObservationalParameters {
    pub fn new(
        center: [f64; 2],
        size: [usize; 2],
        pixel_scale: f64,
        coord_type: [&str; 2],
        frequency_axis: Vec<f64>,
    ) -> Self {
        Self {
            center,
            size,
            pixel_scale,
            coord_type: [coord_type[0].to_string(), coord_type[1].to_string()],
            radesys: String::new(),
            equinox: None,
            rest_frequency: 0.0,
            frequency_axis,
            beam_fwhm: 0.0,
            velocity_definition: String::new(),
            spectral_system: String::new(),
            projection: default_projection(),
        }
    }

    pub fn with_radesys(mut self, radesys: impl Into<String>) -> Self {
        self.radesys = radesys.into();
        self
    }

    pub fn with_equinox(mut self, equinox: f64) -> Self {
        self.equinox = Some(equinox);
        self
    }

    pub fn with_rest_frequency(mut self, rest_frequency: f64) -> Self {
        self.rest_frequency = rest_frequency;
        self
    }

    pub fn with_beam_fwhm(mut self, beam_fwhm: f64) -> Self {
        self.beam_fwhm = beam_fwhm;
        self
    }

    pub fn with_velocity_definition(mut self, veldef: impl Into<String>) -> Self {
        self.velocity_definition = veldef.into();
        self
    }

    pub fn with_spectral_system(mut self, specsys: impl Into<String>) -> Self {
        self.spectral_system = specsys.into();
        self
    }

    pub fn with_projection(mut self, projection: impl Into<String>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Number of spectral channels.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.frequency_axis.len()
    }

    /// Opt-in sanity checks. [`crate::build`] never calls this and accepts
    /// degenerate inputs as given.
    pub fn validate(&self) -> HeaderResult<()> {
        if !(self.pixel_scale.is_finite() && self.pixel_scale > 0.0) {
            return Err(HeaderError::invalid_parameter(format!(
                "pixel_scale must be positive and finite, got {}",
                self.pixel_scale
            )));
        }
        if self.size[0] == 0 || self.size[1] == 0 {
            return Err(HeaderError::invalid_parameter(format!(
                "image size must be non-zero, got {}x{}",
                self.size[0], self.size[1]
            )));
        }
        for ident in &self.coord_type {
            if ident.is_empty() || ident.chars().count() > 4 {
                return Err(HeaderError::invalid_parameter(format!(
                    "coordinate type '{}' must be 1 to 4 characters",
                    ident
                )));
            }
        }
        if self.frequency_axis.len() < 2 {
            return Err(HeaderError::invalid_parameter(format!(
                "frequency axis needs at least 2 channels, got {}",
                self.frequency_axis.len()
            )));
        }
        if !is_strictly_monotonic(&self.frequency_axis) {
            return Err(HeaderError::invalid_parameter(
                "frequency axis must be strictly monotonic",
            ));
        }
        Ok(())
    }
}

fn is_strictly_monotonic(values: &[f64]) -> bool {
    let increasing = values.windows(2).all(|w| w[1] > w[0]);
    let decreasing = values.windows(2).all(|w| w[1] < w[0]);
    increasing || decreasing
}
