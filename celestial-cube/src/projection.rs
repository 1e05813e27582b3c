//! Sky-plane axis derivation for the two supported projections.
//!
//! TAN and SFL share keyword names but not geometry. TAN places the image
//! center at the reference value directly. SFL pins CRVAL2 to the equator and
//! shifts CRPIX2 instead, so the two are handled by separate functions.

use std::fmt;
use std::str::FromStr;

use crate::axis::LinearAxis;
use crate::error::HeaderError;
use crate::params::ObservationalParameters;

const CTYPE_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CubeProjection {
    /// Gnomonic (tangent-plane).
    Tan,
    /// Sanson-Flamsteed, also written GLS.
    #[default]
    Sfl,
}

impl CubeProjection {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tan => "TAN",
            Self::Sfl => "SFL",
        }
    }

    /// Longitude and latitude axes (cube axes 1 and 2).
    pub fn position_axes(&self, params: &ObservationalParameters) -> (LinearAxis, LinearAxis) {
        match self {
            Self::Tan => tan_axes(params),
            Self::Sfl => sfl_axes(params),
        }
    }
}

impl FromStr for CubeProjection {
    type Err = HeaderError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "TAN" => Ok(Self::Tan),
            "SFL" => Ok(Self::Sfl),
            _ => Err(HeaderError::invalid_projection(code)),
        }
    }
}

impl fmt::Display for CubeProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Right-pads a coordinate identifier with `-` to four characters.
/// Longer identifiers pass through untouched.
pub fn pad_ctype(ident: &str) -> String {
    let padding_len = CTYPE_WIDTH.saturating_sub(ident.chars().count());
    format!("{}{}", ident, "-".repeat(padding_len))
}

fn format_ctype(ident: &str, proj: CubeProjection) -> String {
    format!("{}-{}", pad_ctype(ident), proj.code())
}

/// Longitude axis is the same for both projections; sky-x runs leftward.
fn longitude_axis(params: &ObservationalParameters, proj: CubeProjection) -> LinearAxis {
    LinearAxis::new(
        format_ctype(&params.coord_type[0], proj),
        params.center[0],
        params.size[0] as f64 / 2.0,
        -params.pixel_scale,
    )
}

fn tan_axes(params: &ObservationalParameters) -> (LinearAxis, LinearAxis) {
    let lon = longitude_axis(params, CubeProjection::Tan);
    let lat = LinearAxis::new(
        format_ctype(&params.coord_type[1], CubeProjection::Tan),
        params.center[1],
        params.size[1] as f64 / 2.0,
        params.pixel_scale,
    );
    (lon, lat)
}

fn sfl_axes(params: &ObservationalParameters) -> (LinearAxis, LinearAxis) {
    let lon = longitude_axis(params, CubeProjection::Sfl);

    // CRVAL2 is fixed at 0; CRPIX2 is solved so the center pixel lands on center.y.
    let center_pix = params.size[1] as f64 / 2.0 + 1.0;
    let lat = LinearAxis::new(
        format_ctype(&params.coord_type[1], CubeProjection::Sfl),
        0.0,
        center_pix - params.center[1] / params.pixel_scale,
        params.pixel_scale,
    );
    (lon, lat)
}
