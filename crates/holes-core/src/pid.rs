use std::fs;
use std::path::PathBuf;

use crate::WindowResult;

/// Returns the Desktop Holes data directory.
///
/// On Windows: `%LOCALAPPDATA%\desktop-holes`. Created if missing.
fn data_dir() -> WindowResult<PathBuf> {
    let base =
        std::env::var("LOCALAPPDATA").map_err(|_| "LOCALAPPDATA environment variable not set")?;

    let dir = PathBuf::from(base).join("desktop-holes");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the path to the PID file.
pub fn pid_path() -> WindowResult<PathBuf> {
    Ok(data_dir()?.join("holes.pid"))
}

/// Writes the current process's PID to the PID file.
///
/// The CLI uses it to find a daemon whose pipe has stopped answering.
pub fn write_pid_file() -> WindowResult<()> {
    fs::write(pid_path()?, std::process::id().to_string())?;
    Ok(())
}

/// Reads the PID from the PID file, if it exists.
pub fn read_pid_file() -> WindowResult<Option<u32>> {
    let path = pid_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(&path)?;
    parse_pid(&contents).map(Some)
}

/// Removes the PID file. Missing files are not an error.
pub fn remove_pid_file() -> WindowResult<()> {
    let path = pid_path()?;
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(())
}

fn parse_pid(contents: &str) -> WindowResult<u32> {
    let pid = contents
        .trim()
        .parse()
        .map_err(|e| format!("invalid PID file contents: {e}"))?;
    Ok(pid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pid_trims_whitespace() {
        assert_eq!(parse_pid("4242\r\n").unwrap(), 4242);
    }

    #[test]
    fn parse_pid_rejects_garbage() {
        assert!(parse_pid("not-a-pid").is_err());
    }
}
