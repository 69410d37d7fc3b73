//! URL builder for the weserv image-processing API.
//!
//! [`ImageUrlBuilder`] maps chained calls (resize, crop, filters, output
//! format, ...) onto query parameters and serializes them once, on demand.
//! No requests are made; the result is just a URL string.

pub mod builder;
pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod validate;

pub use builder::{ImageUrlBuilder, DEFAULT_GAMMA, DEFAULT_TRIM};
pub use config::{WeservConfig, DEFAULT_API_URL};
pub use error::{BuildError, ParseOptionError};
pub use params::{Alignment, Filter, Fit, MaskType, OptionMap, OutputFormat, ParamValue, Rotation};
pub use validate::{Rejection, ValidationMode};
