pub mod init;
pub mod resolve;
pub mod set;

#[cfg(windows)]
pub mod autostart;
#[cfg(windows)]
pub mod daemon;
#[cfg(windows)]
pub mod monitors;
#[cfg(windows)]
pub mod send;
#[cfg(windows)]
pub mod start;
#[cfg(windows)]
pub mod status;
#[cfg(windows)]
pub mod stop;

/// Exits with an error for commands that need the Windows shell.
#[cfg(not(windows))]
pub fn unsupported() -> ! {
    eprintln!("Error: this command needs the Windows shell; only `init` and `resolve` work here.");
    std::process::exit(1);
}
