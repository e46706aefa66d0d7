//! Named-pipe transport between the CLI and the daemon.
//!
//! One request per connection: the client writes a single JSON
//! [`Command`] line and reads back a single JSON [`Response`] line.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::os::windows::io::FromRawHandle;

use holes_core::ipc::{Command, PIPE_NAME, Response};
use holes_core::WindowResult;
use windows::Win32::Foundation::{
    CloseHandle, DUPLICATE_SAME_ACCESS, DuplicateHandle, HANDLE, INVALID_HANDLE_VALUE,
};
use windows::Win32::Storage::FileSystem::{
    CreateFileW, FILE_SHARE_NONE, FlushFileBuffers, OPEN_EXISTING, PIPE_ACCESS_DUPLEX,
};
use windows::Win32::System::Pipes::{
    ConnectNamedPipe, CreateNamedPipeW, DisconnectNamedPipe, PIPE_READMODE_BYTE, PIPE_TYPE_BYTE,
    PIPE_UNLIMITED_INSTANCES, PIPE_WAIT, WaitNamedPipeW,
};
use windows::Win32::System::Threading::GetCurrentProcess;
use windows::core::HSTRING;

const GENERIC_READ_WRITE: u32 = 0x8000_0000 | 0x4000_0000;

/// Daemon side of the pipe. Each instance serves one connection.
pub struct PipeServer {
    handle: HANDLE,
}

impl PipeServer {
    pub fn create() -> WindowResult<Self> {
        // SAFETY: parameters are valid; the handle is checked below.
        let handle = unsafe {
            CreateNamedPipeW(
                &HSTRING::from(PIPE_NAME),
                PIPE_ACCESS_DUPLEX,
                PIPE_TYPE_BYTE | PIPE_READMODE_BYTE | PIPE_WAIT,
                PIPE_UNLIMITED_INSTANCES,
                512,
                512,
                0,
                None,
            )
        };

        if handle == INVALID_HANDLE_VALUE {
            return Err("Failed to create named pipe".into());
        }
        Ok(Self { handle })
    }

    /// Blocks until a client connects and returns its command.
    pub fn accept_command(&self) -> WindowResult<Command> {
        // SAFETY: blocks until a client connects to this instance.
        unsafe { ConnectNamedPipe(self.handle, None)? };

        let line = read_line(self.handle)?;
        Ok(serde_json::from_str(line.trim())?)
    }

    /// Sends the reply and disconnects the client.
    pub fn send_response(&self, response: &Response) -> WindowResult<()> {
        write_line(self.handle, &serde_json::to_string(response)?)?;

        // SAFETY: waits for the client to read everything; disconnecting
        // earlier would drop unread data (client sees error 233).
        unsafe {
            let _ = FlushFileBuffers(self.handle);
            DisconnectNamedPipe(self.handle)?;
        }
        Ok(())
    }
}

impl Drop for PipeServer {
    fn drop(&mut self) {
        // SAFETY: the server owns its handle.
        unsafe {
            let _ = CloseHandle(self.handle);
        }
    }
}

/// Closes a HANDLE on drop.
struct HandleGuard(HANDLE);

impl Drop for HandleGuard {
    fn drop(&mut self) {
        // SAFETY: the guard owns the handle exclusively.
        unsafe {
            let _ = CloseHandle(self.0);
        }
    }
}

/// Sends `command` to the daemon and waits for its response.
pub fn send_command(command: &Command) -> WindowResult<Response> {
    // SAFETY: opens an existing pipe as a client; closed by the guard.
    let handle = unsafe {
        CreateFileW(
            &HSTRING::from(PIPE_NAME),
            GENERIC_READ_WRITE,
            FILE_SHARE_NONE,
            None,
            OPEN_EXISTING,
            Default::default(),
            None,
        )?
    };
    let _guard = HandleGuard(handle);

    write_line(handle, &serde_json::to_string(command)?)?;
    let line = read_line(handle)?;
    Ok(serde_json::from_str(line.trim())?)
}

/// Returns true when the daemon's pipe exists.
///
/// `WaitNamedPipeW` with a 1 ms timeout does not consume a connection.
pub fn is_daemon_running() -> bool {
    // SAFETY: only checks for an available pipe instance.
    unsafe { WaitNamedPipeW(&HSTRING::from(PIPE_NAME), 1).as_bool() }
}

fn write_line(handle: HANDLE, json: &str) -> WindowResult<()> {
    let mut writer = duplicate_handle_as_file(handle)?;
    writeln!(writer, "{json}")?;
    writer.flush()?;
    Ok(())
}

fn read_line(handle: HANDLE) -> WindowResult<String> {
    let mut reader = BufReader::new(duplicate_handle_as_file(handle)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line)
}

/// Wraps a duplicate of `handle` in a `File`, so the `File` and the
/// original handle are closed independently.
fn duplicate_handle_as_file(handle: HANDLE) -> WindowResult<File> {
    let mut dup = HANDLE::default();

    // SAFETY: the duplicate is owned by the returned File.
    unsafe {
        DuplicateHandle(
            GetCurrentProcess(),
            handle,
            GetCurrentProcess(),
            &mut dup,
            0,
            false,
            DUPLICATE_SAME_ACCESS,
        )?;
        Ok(File::from_raw_handle(dup.0))
    }
}
