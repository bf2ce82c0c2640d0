//! Shell selection per platform

use std::env;

/// A shell able to run one command string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    /// Program to start
    pub program: &'static str,

    /// Flag that makes the next argument the command text
    pub command_flag: &'static str,
}

pub const SH: Shell = Shell {
    program: "sh",
    command_flag: "-c",
};

pub const POWERSHELL: Shell = Shell {
    program: "powershell",
    command_flag: "-c",
};

/// Platform identifier (as in `std::env::consts::OS`) to shell
const PLATFORM_SHELLS: &[(&str, Shell)] = &[("windows", POWERSHELL)];

/// Shell used on platforms missing from the table
const DEFAULT_SHELL: Shell = SH;

impl Shell {
    /// Look up the shell for a platform identifier
    pub fn for_platform(os: &str) -> Shell {
        PLATFORM_SHELLS
            .iter()
            .find(|(platform, _)| *platform == os)
            .map(|(_, shell)| *shell)
            .unwrap_or(DEFAULT_SHELL)
    }

    /// Shell for the platform this binary runs on
    pub fn host() -> Shell {
        Shell::for_platform(env::consts::OS)
    }

    /// Human-readable form of the invocation for `command`
    pub fn render(&self, command: &str) -> String {
        format!("{} {} {}", self.program, self.command_flag, command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_uses_powershell() {
        assert_eq!(Shell::for_platform("windows"), POWERSHELL);
    }

    #[test]
    fn test_unix_platforms_use_sh() {
        for os in ["linux", "macos", "freebsd", "openbsd"] {
            assert_eq!(Shell::for_platform(os), SH);
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(SH.render("echo hi"), "sh -c echo hi");
        assert_eq!(POWERSHELL.render("Get-Date"), "powershell -c Get-Date");
    }

    #[cfg(unix)]
    #[test]
    fn test_host_shell_on_unix() {
        assert_eq!(Shell::host(), SH);
    }
}
