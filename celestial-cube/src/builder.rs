use log::{debug, warn};

use crate::axis::LinearAxis;
use crate::error::HeaderResult;
use crate::header::HeaderMap;
use crate::params::ObservationalParameters;
use crate::projection::CubeProjection;
use crate::spectral::{
    frequency_axis, stokes_axis, velref, AlternateAxis, SpectralSystem, VelocityDefinition,
};

pub const CUBE_NAXIS: i64 = 4;

/// Builds the WCS keyword set for a (lon, lat, freq, stokes) cube.
///
/// The only failure is an unrecognised projection code. Everything else is
/// accepted as given; see [`ObservationalParameters::validate`] for opt-in checks.
pub fn build(params: &ObservationalParameters) -> HeaderResult<HeaderMap> {
    HeaderBuilder::new(params).build()
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderBuilder<'a> {
    params: &'a ObservationalParameters,
}

impl<'a> HeaderBuilder<'a> {
    pub fn new(params: &'a ObservationalParameters) -> Self {
        Self { params }
    }

    pub fn build(&self) -> HeaderResult<HeaderMap> {
        let projection: CubeProjection = self.params.projection.parse()?;
        debug!("building {} cube header", projection);
        self.warn_degenerate();

        let mut header = HeaderMap::new();
        self.write_axis_sizes(&mut header);

        let (lon, lat) = projection.position_axes(self.params);
        lon.write_keywords(&mut header, 1);
        lat.write_keywords(&mut header, 2);

        let spectral = frequency_axis(&self.params.frequency_axis);
        spectral.write_keywords(&mut header, 3);
        stokes_axis().write_keywords(&mut header, 4);

        self.write_velocity_frame(&mut header);
        self.write_alternate_axis(&mut header, &spectral);
        header.insert("RESTFRQ", self.params.rest_frequency);
        self.write_celestial_frame(&mut header);

        Ok(header)
    }

    fn write_axis_sizes(&self, header: &mut HeaderMap) {
        header.insert("NAXIS", CUBE_NAXIS);
        header.insert("NAXIS1", self.params.size[0] as i64);
        header.insert("NAXIS2", self.params.size[1] as i64);
        header.insert("NAXIS3", self.params.channel_count() as i64);
        header.insert("NAXIS4", 1_i64);
    }

    fn write_velocity_frame(&self, header: &mut HeaderMap) {
        let system = SpectralSystem::from_specsys(&self.params.spectral_system);
        let definition = VelocityDefinition::from_veldef(&self.params.velocity_definition);
        let code = velref(system, definition);
        debug!(
            "VELREF = {} (SPECSYS '{}', velocity definition '{}')",
            code, self.params.spectral_system, self.params.velocity_definition
        );

        header.insert("SPECSYS", self.params.spectral_system.as_str());
        header.insert("VELREF", code);
    }

    fn write_alternate_axis(&self, header: &mut HeaderMap, spectral: &LinearAxis) {
        if let Some(alt) = AlternateAxis::zero_velocity(spectral, self.params.rest_frequency) {
            header.insert("ALTRVAL", alt.altrval);
            header.insert("ALTRPIX", alt.altrpix);
        }
    }

    fn write_celestial_frame(&self, header: &mut HeaderMap) {
        if !self.params.radesys.is_empty() {
            header.insert("RADESYS", self.params.radesys.as_str());
        }
        if let Some(equinox) = self.params.equinox.filter(|e| *e > 0.0) {
            header.insert("EQUINOX", equinox);
        }
    }

    fn warn_degenerate(&self) {
        let params = self.params;
        if params.pixel_scale.is_nan() || params.pixel_scale <= 0.0 {
            warn!(
                "non-positive pixel scale {}; position axes will be degenerate",
                params.pixel_scale
            );
        }
        match params.frequency_axis.as_slice() {
            [] | [_] => warn!(
                "frequency axis has {} sample(s); spectral keywords will be NaN",
                params.frequency_axis.len()
            ),
            [first, second, ..] if first == second => {
                warn!("zero channel width at {} Hz; ALTRVAL/ALTRPIX omitted", first)
            }
            _ => {}
        }
    }
}
