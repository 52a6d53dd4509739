//! `geoprobe-core` is the core library for the `GeoProbe` project, which reports on
//! the geospatial tooling installed in an environment.
//!
//! This crate includes:
//! - **Raster Library Access**: version and driver queries against GDAL ([`library`]).
//! - **Module Probing**: importability checks for optional Python extensions ([`module_probe`]).
//! - **Environment Report**: the three-line startup report ([`report`]).
//!
//! The `report` module is consumed by the CLI; the other modules are the seams it queries.

pub mod error;
pub mod library;
pub mod module_probe;
pub mod report;

pub use error::{ProbeError, Result};
pub use library::{DriverSummary, RasterLibrary, default_library};
pub use module_probe::{ModuleAvailability, ModuleProbe, PythonModuleProbe};
pub use report::EnvironmentReport;
