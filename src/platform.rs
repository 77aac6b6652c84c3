//! Host platform detection.
use std::fmt;

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    MacOs,
    Windows,
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::MacOs => write!(f, "macos"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// How the global "use DFHack" switch is expressed on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineMechanism {
    /// A boolean in the user configuration.
    ConfigFlag,
    /// Which SDL library variant occupies `SDL.dll`.
    LibrarySwap,
}

/// Platform information for the current system.
#[derive(Debug, Clone)]
pub struct Platform {
    pub os: Os,
}

impl Platform {
    /// Detect the current platform.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
        }
    }

    /// Create a platform with an explicit OS (for tests and overrides).
    #[must_use]
    pub const fn new(os: Os) -> Self {
        Self { os }
    }

    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }

    /// Mechanism backing the global engine switch on this platform.
    ///
    /// Windows DFHack builds hook the game through a replacement `SDL.dll`;
    /// every other platform launches through a wrapper script that reads
    /// the user setting.
    #[must_use]
    pub fn engine_mechanism(&self) -> EngineMechanism {
        if self.is_windows() {
            EngineMechanism::LibrarySwap
        } else {
            EngineMechanism::ConfigFlag
        }
    }

    /// Program and leading arguments that hand a file or URL to the
    /// desktop environment.
    #[must_use]
    pub const fn opener(&self) -> (&'static str, &'static [&'static str]) {
        match self.os {
            Os::Linux => ("xdg-open", &[]),
            Os::MacOs => ("open", &[]),
            // `start` treats its first quoted argument as the window title
            Os::Windows => ("cmd", &["/C", "start", ""]),
        }
    }

    fn detect_os() -> Os {
        if cfg!(target_os = "windows") {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else {
            // Other Unix-like systems behave like Linux
            Os::Linux
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_detect_matches_target() {
        let p = Platform::detect();
        assert_eq!(p.is_windows(), cfg!(target_os = "windows"));
    }

    #[test]
    fn windows_uses_library_swap() {
        let p = Platform::new(Os::Windows);
        assert_eq!(p.engine_mechanism(), EngineMechanism::LibrarySwap);
    }

    #[test]
    fn unix_platforms_use_config_flag() {
        assert_eq!(
            Platform::new(Os::Linux).engine_mechanism(),
            EngineMechanism::ConfigFlag
        );
        assert_eq!(
            Platform::new(Os::MacOs).engine_mechanism(),
            EngineMechanism::ConfigFlag
        );
    }

    #[test]
    fn opener_per_os() {
        assert_eq!(Platform::new(Os::Linux).opener().0, "xdg-open");
        assert_eq!(Platform::new(Os::MacOs).opener().0, "open");
        let (program, args) = Platform::new(Os::Windows).opener();
        assert_eq!(program, "cmd");
        assert_eq!(args, ["/C", "start", ""]);
    }

    #[test]
    fn os_display() {
        assert_eq!(Os::Linux.to_string(), "linux");
        assert_eq!(Os::MacOs.to_string(), "macos");
        assert_eq!(Os::Windows.to_string(), "windows");
    }
}
