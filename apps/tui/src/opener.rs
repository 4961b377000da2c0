//! Hands external links to the platform's default opener.

use std::io;
use std::process::{Command, Stdio};

use tracing::debug;

/// Program and leading arguments used to open a URL on this platform.
fn opener() -> (&'static str, &'static [&'static str]) {
    const MACOS: &[&str] = &[];
    const WINDOWS: &[&str] = &["/C", "start", ""];
    const OTHER: &[&str] = &[];

    if cfg!(target_os = "macos") {
        ("open", MACOS)
    } else if cfg!(target_os = "windows") {
        ("cmd", WINDOWS)
    } else {
        ("xdg-open", OTHER)
    }
}

/// Spawn the opener detached from the TUI's terminal; does not wait for it.
pub(crate) fn open_url(url: &str) -> io::Result<()> {
    let (program, args) = opener();
    debug!(program, url, "spawning opener");
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_is_platform_specific() {
        let (program, _) = opener();
        if cfg!(target_os = "linux") {
            assert_eq!(program, "xdg-open");
        }
        assert!(!program.is_empty());
    }
}
