pub mod axis;
pub mod builder;
pub mod error;
pub mod header;
pub mod params;
pub mod projection;
pub mod spectral;

pub use axis::LinearAxis;
pub use builder::{build, HeaderBuilder};
pub use error::{HeaderError, HeaderResult};
pub use header::{HeaderMap, HeaderValue, KeywordProvider};
pub use params::ObservationalParameters;
pub use projection::{pad_ctype, CubeProjection};
pub use spectral::{velref, AlternateAxis, SpectralSystem, VelocityDefinition};
