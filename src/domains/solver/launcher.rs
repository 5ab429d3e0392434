//! Browser launching.
//!
//! The solver service never talks to a browser directly; it goes through a
//! [`BrowserLauncher`] so that tests can observe launches without spawning
//! processes.

use std::io;
use std::process::{Command, Stdio};
use tracing::debug;

/// Opens URLs in a browser.
pub trait BrowserLauncher: Send + Sync {
    /// Open `url`. Returns once the browser has been asked to open it; the
    /// browser's own startup is not awaited.
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Launcher backed by the platform's default URL opener.
///
/// A custom executable can be configured instead (e.g. `firefox`), in which
/// case the URL is passed as its only argument.
#[derive(Debug, Clone, Default)]
pub struct SystemBrowser {
    command: Option<String>,
}

impl SystemBrowser {
    /// Create a launcher using the platform opener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a launcher using a custom executable.
    pub fn with_command(command: Option<String>) -> Self {
        Self { command }
    }

    fn build_command(&self, url: &str) -> Command {
        if let Some(program) = &self.command {
            let mut cmd = Command::new(program);
            cmd.arg(url);
            return cmd;
        }

        #[cfg(target_os = "macos")]
        let cmd = {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        };

        #[cfg(target_os = "windows")]
        let cmd = {
            // `start` is a cmd builtin; the empty string is the window title.
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        };

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let cmd = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        };

        cmd
    }
}

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        let mut cmd = self.build_command(url);
        debug!("Spawning browser launcher: {:?}", cmd);

        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Reap the opener in the background so it does not linger as a zombie.
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_command_receives_url() {
        let launcher = SystemBrowser::with_command(Some("my-browser".to_string()));
        let cmd = launcher.build_command("http://localhost:8000/rubik.html?speed=2");
        assert_eq!(cmd.get_program(), "my-browser");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["http://localhost:8000/rubik.html?speed=2"]);
    }

    #[test]
    fn test_missing_executable_reports_error() {
        let launcher =
            SystemBrowser::with_command(Some("definitely-not-a-browser-0xdeadbeef".to_string()));
        let result = launcher.open("http://localhost:8000/rubik.html");
        assert!(result.is_err());
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    #[test]
    fn test_default_opener_on_unix() {
        let cmd = SystemBrowser::new().build_command("http://localhost:8000/rubik.html");
        assert_eq!(cmd.get_program(), "xdg-open");
    }
}
