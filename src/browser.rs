use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

/// Platform command that hands a URL to the default browser
fn open_command(url: &str) -> Option<Command> {
    #[cfg(target_os = "macos")]
    let command = {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        Some(cmd)
    };

    #[cfg(target_os = "windows")]
    let command = {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "start", "", url]);
        Some(cmd)
    };

    #[cfg(target_os = "linux")]
    let command = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        Some(cmd)
    };

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    let command = {
        let _ = url;
        None
    };

    command
}

/// Open URL in browser using platform-specific command
pub fn open(url: &str) -> Result<()> {
    let Some(mut command) = open_command(url) else {
        bail!("Opening a browser is not supported on this operating system");
    };

    info!("Opening login URL in browser");

    command
        .status()
        .context("Failed to execute browser command")
        .and_then(|s| {
            s.success()
                .then_some(())
                .context("Browser command returned error")
        })
}
