// SPDX-License-Identifier: MPL-2.0
//! Platform glue for handing URLs to the default browser.
//!
//! The sign-up links leave the application; the page is opened with the
//! platform's opener command and the app keeps running.

use std::io;
use std::process::Command;

/// Opens `url` in the user's default browser.
///
/// The opener process is spawned and not awaited; a spawn failure is the
/// only error surfaced.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        // `start` is a cmd builtin; the empty string is the window title slot.
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    {
        Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}
