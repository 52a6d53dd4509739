//! Access to the raster-processing library being probed.
//!
//! The [`RasterLibrary`] trait is the seam between the reporter and GDAL. The
//! GDAL-backed implementation lives behind the `gdal` cargo feature; without it,
//! [`default_library`] reports the library as unavailable.
//!
//! # Examples
//!
//! ```no_run
//! use geoprobe_core::library::default_library;
//!
//! let library = default_library()?;
//! println!("{} drivers", library.driver_count()?);
//! # Ok::<(), geoprobe_core::ProbeError>(())
//! ```

use crate::error::Result;

/// Name of the mandatory library, as printed in the report and in errors.
pub const LIBRARY_NAME: &str = "GDAL";

/// Metadata describing one registered format driver.
///
/// A driver knows how to read and/or write one file format. GDAL drivers may
/// handle raster data, vector data, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverSummary {
    /// Short name used for driver identification (e.g., `"GTiff"`).
    pub short_name: String,
    /// Long descriptive name for display purposes (e.g., `"GeoTIFF"`).
    pub long_name: String,
    /// Whether the driver handles raster datasets.
    pub raster: bool,
    /// Whether the driver handles vector datasets.
    pub vector: bool,
}

impl DriverSummary {
    /// Returns a human-readable label for the kinds of data the driver handles.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoprobe_core::library::DriverSummary;
    ///
    /// let driver = DriverSummary {
    ///     short_name: "GPKG".to_string(),
    ///     long_name: "GeoPackage".to_string(),
    ///     raster: true,
    ///     vector: true,
    /// };
    /// assert_eq!(driver.kind(), "Raster, Vector");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match (self.raster, self.vector) {
            (true, true) => "Raster, Vector",
            (true, false) => "Raster",
            (false, true) => "Vector",
            (false, false) => "Other",
        }
    }
}

/// Metadata queries against an installed raster-processing library.
///
/// Every call reads fresh values from the library; nothing is cached.
pub trait RasterLibrary {
    /// Returns the library's release version string (e.g., `"3.6.2"`).
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Query`](crate::ProbeError::Query) if the library
    /// reports no version.
    fn version(&self) -> Result<String>;

    /// Returns the number of registered format drivers.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Query`](crate::ProbeError::Query) if the count
    /// cannot be read.
    fn driver_count(&self) -> Result<usize>;

    /// Lists every registered driver in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Query`](crate::ProbeError::Query) if a driver
    /// cannot be looked up by index.
    fn drivers(&self) -> Result<Vec<DriverSummary>>;
}

#[cfg(feature = "gdal")]
pub use gdal_backend::GdalLibrary;

#[cfg(feature = "gdal")]
mod gdal_backend {
    use gdal::version::VersionInfo;
    use gdal::{DriverManager, Metadata};
    use log::debug;

    use super::{DriverSummary, RasterLibrary};
    use crate::error::{Result, query_failed};

    /// [`RasterLibrary`] backed by the system GDAL through the `gdal` crate.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct GdalLibrary;

    impl GdalLibrary {
        /// Creates a handle to the linked GDAL library.
        #[must_use]
        pub fn new() -> Self {
            Self
        }
    }

    impl RasterLibrary for GdalLibrary {
        fn version(&self) -> Result<String> {
            let version = VersionInfo::release_name();
            debug!("GDAL RELEASE_NAME: {version:?}");
            let version = version.trim();
            if version.is_empty() {
                return Err(query_failed("GDAL version", "empty RELEASE_NAME"));
            }
            Ok(version.to_string())
        }

        fn driver_count(&self) -> Result<usize> {
            // Registers all drivers on first use.
            let count = DriverManager::count();
            debug!("GDAL driver count: {count}");
            Ok(count)
        }

        fn drivers(&self) -> Result<Vec<DriverSummary>> {
            (0..DriverManager::count())
                .map(|index| {
                    let driver = DriverManager::get_driver(index)
                        .map_err(|e| query_failed(&format!("driver #{index}"), e))?;
                    let has_cap =
                        |key: &str| driver.metadata_item(key, "").is_some_and(|v| v == "YES");
                    Ok(DriverSummary {
                        short_name: driver.short_name(),
                        long_name: driver.long_name(),
                        raster: has_cap("DCAP_RASTER"),
                        vector: has_cap("DCAP_VECTOR"),
                    })
                })
                .collect()
        }
    }
}

/// Returns the library implementation compiled into this build.
///
/// # Errors
///
/// Returns [`ProbeError::LibraryUnavailable`](crate::ProbeError::LibraryUnavailable)
/// when the crate was built without the `gdal` feature.
#[cfg(feature = "gdal")]
pub fn default_library() -> Result<Box<dyn RasterLibrary>> {
    log::info!("Using {LIBRARY_NAME} linked through the gdal crate");
    Ok(Box::new(GdalLibrary::new()))
}

/// Returns the library implementation compiled into this build.
///
/// # Errors
///
/// Returns [`ProbeError::LibraryUnavailable`](crate::ProbeError::LibraryUnavailable)
/// when the crate was built without the `gdal` feature.
#[cfg(not(feature = "gdal"))]
pub fn default_library() -> Result<Box<dyn RasterLibrary>> {
    Err(crate::error::ProbeError::LibraryUnavailable {
        library: LIBRARY_NAME.to_string(),
        reason: "geoprobe was built without the 'gdal' feature".to_string(),
    })
}
