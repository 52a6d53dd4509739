//! The environment report printed at startup.
//!
//! Collection runs three steps in a fixed order: library version, driver
//! count, then the optional SNAP module probe. The first two are mandatory and
//! propagate errors; the third always yields one of two lines.
//!
//! # Examples
//!
//! ```
//! use geoprobe_core::report::EnvironmentReport;
//! use geoprobe_core::module_probe::ModuleAvailability;
//!
//! let report = EnvironmentReport {
//!     library_version: "3.6.2".to_string(),
//!     driver_count: 120,
//!     snappy: ModuleAvailability::Available,
//! };
//! assert_eq!(
//!     report.to_string(),
//!     "GDAL version: 3.6.2\nAvailable raster drivers: 120\nesa_snappy: available"
//! );
//! ```

use std::fmt;
use std::io::Write;

use log::info;

use crate::error::Result;
use crate::library::RasterLibrary;
use crate::module_probe::{ModuleAvailability, ModuleProbe};

/// Python module providing the ESA SNAP bindings.
pub const SNAPPY_MODULE: &str = "esa_snappy";

const VERSION_PREFIX: &str = "GDAL version: ";
const DRIVER_COUNT_PREFIX: &str = "Available raster drivers: ";
const SNAPPY_AVAILABLE: &str = "esa_snappy: available";
const SNAPPY_NOT_AVAILABLE: &str =
    "esa_snappy: not available (use full Dockerfile for SNAP support)";

/// Snapshot of the geospatial environment, gathered fresh on each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    /// Release version of the raster library.
    pub library_version: String,
    /// Number of registered format drivers.
    pub driver_count: usize,
    /// Whether `esa_snappy` could be imported.
    pub snappy: ModuleAvailability,
}

impl EnvironmentReport {
    /// Queries `library` and `probe` in report order.
    ///
    /// # Errors
    ///
    /// Returns the library's error if the version or driver count cannot be
    /// read. The module probe never fails.
    pub fn collect(library: &dyn RasterLibrary, probe: &dyn ModuleProbe) -> Result<Self> {
        let library_version = library.version()?;
        info!("Library version: {library_version}");

        let driver_count = library.driver_count()?;
        info!("Registered drivers: {driver_count}");

        let snappy = probe.probe(SNAPPY_MODULE);
        info!("{SNAPPY_MODULE}: {snappy:?}");

        Ok(Self {
            library_version,
            driver_count,
            snappy,
        })
    }

    /// Renders the three report lines in output order.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        let snappy = if self.snappy.is_available() {
            SNAPPY_AVAILABLE
        } else {
            SNAPPY_NOT_AVAILABLE
        };
        [
            format!("{VERSION_PREFIX}{}", self.library_version),
            format!("{DRIVER_COUNT_PREFIX}{}", self.driver_count),
            snappy.to_string(),
        ]
    }

    /// Writes the report to `out`, one newline-terminated line per step.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Io`](crate::ProbeError::Io) if writing to `out` fails.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for EnvironmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;

    use super::*;
    use crate::ProbeError;
    use crate::error::query_failed;
    use crate::library::DriverSummary;

    struct FakeLibrary {
        version: &'static str,
        drivers: usize,
    }

    impl RasterLibrary for FakeLibrary {
        fn version(&self) -> Result<String> {
            Ok(self.version.to_string())
        }

        fn driver_count(&self) -> Result<usize> {
            Ok(self.drivers)
        }

        fn drivers(&self) -> Result<Vec<DriverSummary>> {
            Ok(Vec::new())
        }
    }

    struct MissingLibrary;

    impl RasterLibrary for MissingLibrary {
        fn version(&self) -> Result<String> {
            Err(ProbeError::LibraryUnavailable {
                library: "GDAL".to_string(),
                reason: "not installed".to_string(),
            })
        }

        fn driver_count(&self) -> Result<usize> {
            Err(query_failed("driver count", "not installed"))
        }

        fn drivers(&self) -> Result<Vec<DriverSummary>> {
            Err(query_failed("drivers", "not installed"))
        }
    }

    /// Records which modules were probed.
    struct FakeProbe {
        present: bool,
        probed: RefCell<Vec<String>>,
    }

    impl FakeProbe {
        fn new(present: bool) -> Self {
            Self {
                present,
                probed: RefCell::new(Vec::new()),
            }
        }
    }

    impl ModuleProbe for FakeProbe {
        fn probe(&self, module: &str) -> ModuleAvailability {
            self.probed.borrow_mut().push(module.to_string());
            self.present.into()
        }
    }

    /// Writer whose output side has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn scenario_library() -> FakeLibrary {
        FakeLibrary {
            version: "3.6.2",
            drivers: 120,
        }
    }

    #[test]
    fn test_report_without_snappy() {
        let probe = FakeProbe::new(false);
        let report = EnvironmentReport::collect(&scenario_library(), &probe).unwrap();

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "GDAL version: 3.6.2\n\
             Available raster drivers: 120\n\
             esa_snappy: not available (use full Dockerfile for SNAP support)\n"
        );
        assert_eq!(*probe.probed.borrow(), vec!["esa_snappy".to_string()]);
    }

    #[test]
    fn test_report_with_snappy() {
        let without = EnvironmentReport::collect(&scenario_library(), &FakeProbe::new(false))
            .unwrap()
            .lines();
        let with = EnvironmentReport::collect(&scenario_library(), &FakeProbe::new(true))
            .unwrap()
            .lines();

        assert_eq!(with[0], without[0]);
        assert_eq!(with[1], without[1]);
        assert_eq!(with[2], "esa_snappy: available");
    }

    #[test]
    fn test_missing_library_fails_before_probe() {
        let probe = FakeProbe::new(true);
        let result = EnvironmentReport::collect(&MissingLibrary, &probe);

        assert!(matches!(
            result,
            Err(ProbeError::LibraryUnavailable { .. })
        ));
        assert!(probe.probed.borrow().is_empty());
    }

    #[test]
    fn test_line_formats() {
        for (version, drivers, present) in [("3.6.2", 120, false), ("3.9.0dev", 0, true)] {
            let library = FakeLibrary { version, drivers };
            let report = EnvironmentReport::collect(&library, &FakeProbe::new(present)).unwrap();
            let rendered = report.to_string();
            let lines: Vec<&str> = rendered.lines().collect();

            assert_eq!(lines.len(), 3);
            let token = lines[0].strip_prefix("GDAL version: ").unwrap();
            assert!(!token.is_empty());
            let count = lines[1].strip_prefix("Available raster drivers: ").unwrap();
            assert_eq!(count.parse::<usize>().unwrap(), drivers);
            assert!(lines[2] == SNAPPY_AVAILABLE || lines[2] == SNAPPY_NOT_AVAILABLE);
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let report = EnvironmentReport::collect(&scenario_library(), &FakeProbe::new(false)).unwrap();
        let err = report.write_to(ClosedPipe).unwrap_err();

        assert!(matches!(err, ProbeError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "Failed to write report: stdout closed");
    }
}
