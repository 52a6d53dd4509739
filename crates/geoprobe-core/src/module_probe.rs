//! Capability probe for optional Python extension modules.
//!
//! A probe attempts to import a module solely to learn whether it is present.
//! Every failure of the attempt is expected and becomes
//! [`ModuleAvailability::NotAvailable`]; nothing here returns an error.

use std::ffi::OsString;
use std::process::{Command, Stdio};

use log::debug;

/// Interpreter used when none is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Outcome of a single import attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleAvailability {
    /// The module imported successfully.
    Available,
    /// The import failed for any reason.
    NotAvailable,
}

impl ModuleAvailability {
    /// Returns `true` if the module imported successfully.
    ///
    /// # Examples
    ///
    /// ```
    /// use geoprobe_core::module_probe::ModuleAvailability;
    ///
    /// assert!(ModuleAvailability::Available.is_available());
    /// assert!(!ModuleAvailability::NotAvailable.is_available());
    /// ```
    #[must_use]
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl From<bool> for ModuleAvailability {
    fn from(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::NotAvailable
        }
    }
}

/// Tests whether an optional module can be loaded.
pub trait ModuleProbe {
    /// Attempts to load `module` and reports whether it succeeded.
    fn probe(&self, module: &str) -> ModuleAvailability;
}

/// [`ModuleProbe`] that runs `<interpreter> -c "import <module>"`.
///
/// A zero exit status means the module is importable. A non-zero status, a
/// signal, or an interpreter that cannot be spawned all mean it is not; a
/// broken installation is not distinguished from an absent one.
#[derive(Debug, Clone)]
pub struct PythonModuleProbe {
    interpreter: OsString,
}

impl PythonModuleProbe {
    /// Creates a probe that runs the given interpreter.
    #[must_use]
    pub fn new(interpreter: impl Into<OsString>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Returns the interpreter this probe runs.
    #[must_use]
    pub fn interpreter(&self) -> &OsString {
        &self.interpreter
    }
}

impl Default for PythonModuleProbe {
    fn default() -> Self {
        Self::new(DEFAULT_INTERPRETER)
    }
}

impl ModuleProbe for PythonModuleProbe {
    fn probe(&self, module: &str) -> ModuleAvailability {
        if !is_module_path(module) {
            debug!("Refusing to probe invalid module name {module:?}");
            return ModuleAvailability::NotAvailable;
        }

        let status = Command::new(&self.interpreter)
            .arg("-c")
            .arg(format!("import {module}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                debug!(
                    "import {module} via {:?} exited with {status}",
                    self.interpreter
                );
                status.success().into()
            },
            Err(e) => {
                debug!("Could not run {:?}: {e}", self.interpreter);
                ModuleAvailability::NotAvailable
            },
        }
    }
}

/// Returns `true` for dotted Python identifiers such as `esa_snappy` or `osgeo.gdal`.
fn is_module_path(module: &str) -> bool {
    !module.is_empty()
        && module.split('.').all(|part| {
            let mut chars = part.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
