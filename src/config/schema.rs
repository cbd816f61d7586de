//! Configuration value types.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ScaffoldError;

/// How the generated MCP server talks to its client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Transport {
    /// Streamable HTTP; the server runs remotely.
    #[default]
    Http,
    /// Standard I/O; the server runs on the user's machine.
    Stdio,
}

impl Transport {
    /// Identifier used on the command line and in prompt answers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Stdio => "stdio",
        }
    }

    /// Parse a transport, treating anything unrecognised as HTTP.
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown transport '{}', using http", s);
            Self::Http
        })
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "stdio" => Ok(Self::Stdio),
            other => Err(ScaffoldError::validation(format!(
                "Unknown transport '{}'. Expected http or stdio",
                other
            ))),
        }
    }
}

/// Package manager used to install the generated project's dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Bun,
    Yarn,
    Pnpm,
}

impl PackageManager {
    /// All supported package managers, in prompt order.
    pub fn all() -> [PackageManager; 4] {
        [Self::Npm, Self::Bun, Self::Yarn, Self::Pnpm]
    }

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Bun => "bun",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Lockfile this package manager writes during install.
    pub fn lockfile(&self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Bun => "bun.lock",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
        }
    }

    /// Command suggested to start the dev server.
    pub fn dev_command(&self) -> String {
        format!("{} run dev", self.program())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .into_iter()
            .find(|pm| pm.program() == wanted)
            .ok_or_else(|| {
                ScaffoldError::validation(format!(
                    "Unknown package manager '{}'. Expected one of: npm, bun, yarn, pnpm",
                    s.trim()
                ))
            })
    }
}

/// Fully resolved settings for one scaffolding run.
///
/// Built once by [`ConfigResolver`](super::ConfigResolver); fields are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory name of the new project (non-empty, not yet on disk).
    pub project_name: String,
    /// Selected transport. Always `Http` when `gpt` is set.
    pub transport: Transport,
    /// Package manager for the install step.
    pub package_manager: PackageManager,
    /// Whether the ChatGPT app template was requested.
    pub gpt: bool,
    /// Notice attached to the selected template, if any.
    pub beta_warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_parses_case_insensitively() {
        assert_eq!("HTTP".parse::<Transport>().unwrap(), Transport::Http);
        assert_eq!(" stdio ".parse::<Transport>().unwrap(), Transport::Stdio);
        assert!("sse".parse::<Transport>().is_err());
    }

    #[test]
    fn transport_lossy_falls_back_to_http() {
        assert_eq!(Transport::from_str_lossy("stdio"), Transport::Stdio);
        assert_eq!(Transport::from_str_lossy("websocket"), Transport::Http);
        assert_eq!(Transport::from_str_lossy(""), Transport::Http);
    }

    #[test]
    fn transport_display_round_trips_through_parse() {
        for t in [Transport::Http, Transport::Stdio] {
            assert_eq!(t.to_string().parse::<Transport>().unwrap(), t);
        }
    }

    #[test]
    fn package_manager_parse() {
        assert_eq!("pnpm".parse::<PackageManager>().unwrap(), PackageManager::Pnpm);
        assert_eq!("Yarn".parse::<PackageManager>().unwrap(), PackageManager::Yarn);
        let err = "pip".parse::<PackageManager>().unwrap_err();
        assert!(err.to_string().contains("pip"));
    }

    #[test]
    fn package_manager_commands() {
        assert_eq!(PackageManager::Bun.program(), "bun");
        assert_eq!(PackageManager::Npm.dev_command(), "npm run dev");
        assert_eq!(PackageManager::Pnpm.lockfile(), "pnpm-lock.yaml");
    }

    #[test]
    fn defaults_match_cli_defaults() {
        assert_eq!(Transport::default(), Transport::Http);
        assert_eq!(PackageManager::default(), PackageManager::Npm);
    }

    #[test]
    fn value_enum_names_match_programs() {
        for pm in PackageManager::all() {
            let value = pm.to_possible_value().unwrap();
            assert_eq!(value.get_name(), pm.program());
        }
    }
}
