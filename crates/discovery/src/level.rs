use std::fmt::{self, Display};

use tracing::Level;

/// Minimum level at which discovery also enumerates infrastructure stacks.
///
/// Stack enumeration is account-wide and paginated, so it only runs when the
/// operator asked for debug diagnostics.
pub const STACK_SCAN_THRESHOLD: DiagnosticLevel = DiagnosticLevel::DEBUG;

/// Operator-configured verbosity.
///
/// Passed into discovery by value; nothing in this crate mutates it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DiagnosticLevel(u8);

impl DiagnosticLevel {
    /// No output at all.
    pub const SILENT: Self = Self(0);

    /// Errors only.
    pub const ERROR: Self = Self(1);

    /// Errors and warnings.
    pub const WARNING: Self = Self(2);

    /// Normal operation.
    pub const NORMAL: Self = Self(3);

    /// Debug diagnostics.
    pub const DEBUG: Self = Self(4);

    /// Everything.
    pub const TRACE: Self = Self(5);

    /// Creates a level from its numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether discovery should enumerate infrastructure stacks.
    #[must_use]
    pub const fn scans_stacks(self) -> bool {
        self.0 >= STACK_SCAN_THRESHOLD.0
    }

    /// The most verbose `tracing` level to emit, or `None` when silent.
    #[must_use]
    pub const fn tracing_level(self) -> Option<Level> {
        match self.0 {
            0 => None,
            1 => Some(Level::ERROR),
            2 => Some(Level::WARN),
            3 => Some(Level::INFO),
            4 => Some(Level::DEBUG),
            _ => Some(Level::TRACE),
        }
    }
}

impl Default for DiagnosticLevel {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<u8> for DiagnosticLevel {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_normal_and_skips_stacks() {
        let level = DiagnosticLevel::default();

        assert_eq!(level, DiagnosticLevel::NORMAL);
        assert!(!level.scans_stacks());
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!DiagnosticLevel::new(STACK_SCAN_THRESHOLD.value() - 1).scans_stacks());
        assert!(STACK_SCAN_THRESHOLD.scans_stacks());
        assert!(DiagnosticLevel::TRACE.scans_stacks());
        assert!(DiagnosticLevel::new(u8::MAX).scans_stacks());
    }

    #[test]
    fn test_tracing_levels() {
        assert_eq!(DiagnosticLevel::SILENT.tracing_level(), None);
        assert_eq!(DiagnosticLevel::NORMAL.tracing_level(), Some(Level::INFO));
        assert_eq!(DiagnosticLevel::DEBUG.tracing_level(), Some(Level::DEBUG));
        assert_eq!(DiagnosticLevel::new(9).tracing_level(), Some(Level::TRACE));
    }
}
