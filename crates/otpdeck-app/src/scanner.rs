//! Scanner capability detection seam.

use otpdeck_core::config::Config;

/// Total capability check: can this host scan credentials?
///
/// Never fails; `BeginEntry` branches on the answer and nothing else.
pub trait ScannerCapability {
    fn is_available(&self) -> bool;
}

/// Capability answer taken from the host configuration.
///
/// Actual camera/QR probing is the host's problem; whatever it knows ends
/// up in `Config::scanner_available`.
#[derive(Debug, Clone, Copy)]
pub struct ConfigScanner {
    available: bool,
}

impl ConfigScanner {
    pub fn from_config(config: &Config) -> Self {
        Self {
            available: config.scanner_available,
        }
    }

    pub fn fixed(available: bool) -> Self {
        Self { available }
    }
}

impl ScannerCapability for ConfigScanner {
    fn is_available(&self) -> bool {
        self.available
    }
}
