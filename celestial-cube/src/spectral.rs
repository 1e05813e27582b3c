//! Spectral and Stokes axes, plus the AIPS `VELREF` code.
//!
//! `VELREF` packs the velocity frame into the low byte and adds 256 for the
//! radio velocity definition. AIPS defines no flag for the relativistic
//! definition, so it leaves the code unchanged.

use crate::axis::LinearAxis;

pub const RADIO_VELREF_FLAG: i64 = 256;

/// Spectral reference frame as recorded in `SPECSYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectralSystem {
    Lsrk,
    Heliocentric,
    Topocentric,
    Other,
}

impl SpectralSystem {
    pub fn from_specsys(specsys: &str) -> Self {
        match specsys {
            "LSRK" => Self::Lsrk,
            "HELIOCEN" => Self::Heliocentric,
            "TOPOCENT" => Self::Topocentric,
            _ => Self::Other,
        }
    }

    pub fn velref_base(&self) -> i64 {
        match self {
            Self::Lsrk => 1,
            Self::Heliocentric => 2,
            Self::Topocentric => 3,
            Self::Other => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityDefinition {
    Radio,
    Other,
}

impl VelocityDefinition {
    pub fn from_veldef(veldef: &str) -> Self {
        match veldef {
            "RADI" => Self::Radio,
            _ => Self::Other,
        }
    }

    pub fn velref_flag(&self) -> i64 {
        match self {
            Self::Radio => RADIO_VELREF_FLAG,
            Self::Other => 0,
        }
    }
}

pub fn velref(system: SpectralSystem, definition: VelocityDefinition) -> i64 {
    system.velref_base() + definition.velref_flag()
}

/// Frequency axis anchored on the first channel.
///
/// Missing samples come out as NaN rather than panicking: an empty axis has
/// no reference value and a single channel has no increment.
pub fn frequency_axis(frequencies: &[f64]) -> LinearAxis {
    let crval = frequencies.first().copied().unwrap_or(f64::NAN);
    let cdelt = match frequencies {
        [first, second, ..] => second - first,
        _ => f64::NAN,
    };
    LinearAxis::new("FREQ", crval, 1.0, cdelt).with_unit("Hz")
}

/// Single-plane Stokes axis holding total intensity (I = 1).
pub fn stokes_axis() -> LinearAxis {
    LinearAxis::new("STOKES", 1.0, 1.0, 1.0)
}

/// `ALTRVAL` / `ALTRPIX` pair placing zero velocity on the spectral axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlternateAxis {
    pub altrval: f64,
    pub altrpix: f64,
}

impl AlternateAxis {
    /// `None` unless the channel width is a non-zero number and the rest
    /// frequency is known.
    pub fn zero_velocity(spectral: &LinearAxis, rest_frequency: f64) -> Option<Self> {
        let cdelt = spectral.cdelt;
        if cdelt == 0.0 || cdelt.is_nan() || rest_frequency.is_nan() || rest_frequency <= 0.0 {
            return None;
        }
        Some(Self {
            altrval: 0.0,
            altrpix: spectral.crpix + (rest_frequency - spectral.crval) / cdelt,
        })
    }
}
