//! Environment probe for process-level state.
//!
//! Gatherers never query the effective uid or the host OS family
//! directly; they go through [`EnvProbe`] so tests can substitute
//! deterministic fakes without touching real process state.

/// Operating system family of the controller host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// POSIX-like systems (Linux, macOS, BSDs).
    Posix,
    /// Windows. The identity tooling is POSIX-only, so gathering
    /// refuses to run here.
    Windows,
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsFamily::Posix => write!(f, "posix"),
            OsFamily::Windows => write!(f, "windows"),
        }
    }
}

/// Process-level environment queries used by the gatherers.
pub trait EnvProbe {
    /// Effective user id of the controller process.
    fn effective_uid(&self) -> u32;

    /// OS family of the controller host.
    fn os_family(&self) -> OsFamily;
}

/// Production probe backed by the real process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl EnvProbe for SystemProbe {
    #[cfg(unix)]
    fn effective_uid(&self) -> u32 {
        // geteuid(2) cannot fail.
        unsafe { libc::geteuid() }
    }

    #[cfg(not(unix))]
    fn effective_uid(&self) -> u32 {
        0
    }

    fn os_family(&self) -> OsFamily {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Posix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_family_display() {
        assert_eq!(OsFamily::Posix.to_string(), "posix");
        assert_eq!(OsFamily::Windows.to_string(), "windows");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_probe_reports_posix() {
        let probe = SystemProbe;
        assert_eq!(probe.os_family(), OsFamily::Posix);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_probe_uid_is_stable() {
        let probe = SystemProbe;
        assert_eq!(probe.effective_uid(), probe.effective_uid());
    }
}
