use crate::header::HeaderMap;

/// Linear calibration of one cube axis: `world = crval + cdelt * (pixel - crpix)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearAxis {
    pub ctype: String,
    pub cunit: Option<String>,
    pub crval: f64,
    pub crpix: f64,
    pub cdelt: f64,
}

impl LinearAxis {
    pub fn new(ctype: impl Into<String>, crval: f64, crpix: f64, cdelt: f64) -> Self {
        Self {
            ctype: ctype.into(),
            cunit: None,
            crval,
            crpix,
            cdelt,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.cunit = Some(unit.into());
        self
    }

    /// World coordinate at a 1-based pixel position.
    #[inline]
    pub fn world_at(&self, pixel: f64) -> f64 {
        self.crval + self.cdelt * (pixel - self.crpix)
    }

    /// Writes CTYPEn, CUNITn (when set), CRVALn, CRPIXn, CDELTn in that order.
    pub fn write_keywords(&self, header: &mut HeaderMap, index: usize) {
        header.insert(format!("CTYPE{}", index), self.ctype.as_str());
        if let Some(unit) = &self.cunit {
            header.insert(format!("CUNIT{}", index), unit.as_str());
        }
        header.insert(format!("CRVAL{}", index), self.crval);
        header.insert(format!("CRPIX{}", index), self.crpix);
        header.insert(format!("CDELT{}", index), self.cdelt);
    }
}
