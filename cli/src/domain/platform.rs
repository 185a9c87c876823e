//! Host platform detection and virtual-environment path resolution.
//!
//! Pure functions only — paths are produced in display form using the
//! target platform's separator, independent of the host running the code.

use serde::Serialize;

/// Platform family that decides the virtual-environment layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// `Scripts\` layout with backslash separators.
    Windows,
    /// `bin/` layout with forward-slash separators.
    Posix,
}

impl Platform {
    /// Platform of the running binary.
    #[must_use]
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Classify a platform identifier such as `"windows"`, `"win32"` or
    /// `"linux"`. Anything starting with `win` is Windows.
    #[must_use]
    pub fn from_identifier(id: &str) -> Self {
        if id.to_ascii_lowercase().starts_with("win") {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Path separator used in display paths.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Self::Windows => "\\",
            Self::Posix => "/",
        }
    }

    /// Directory inside the environment that holds its executables.
    #[must_use]
    pub fn bin_dir(self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            Self::Posix => "bin",
        }
    }

    /// Interpreter used to create the environment when none is configured.
    #[must_use]
    pub fn default_python(self) -> &'static str {
        match self {
            Self::Windows => "python",
            Self::Posix => "python3",
        }
    }

    /// Join path segments with this platform's separator, normalising any
    /// separators already present in the segments.
    #[must_use]
    pub fn join(self, parts: &[&str]) -> String {
        parts
            .iter()
            .flat_map(|p| p.split(['/', '\\']))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => f.write_str("windows"),
            Self::Posix => f.write_str("posix"),
        }
    }
}

/// Paths and commands inside a virtual environment, in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenvCommands {
    /// Command the user types to activate the environment.
    pub activate: String,
    /// Package installer executable.
    pub pip: String,
    /// Interpreter inside the environment.
    pub python: String,
}

/// Resolve the environment's activation command and executables.
#[must_use]
pub fn venv_commands(platform: Platform, venv_dir: &str) -> VenvCommands {
    let bin = platform.bin_dir();
    let activate_script = platform.join(&[venv_dir, bin, "activate"]);
    let activate = match platform {
        Platform::Windows => activate_script,
        Platform::Posix => format!("source {activate_script}"),
    };
    VenvCommands {
        activate,
        pip: platform.join(&[venv_dir, bin, "pip"]),
        python: platform.join(&[venv_dir, bin, "python"]),
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
