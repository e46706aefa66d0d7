use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_ACCESS_RIGHTS, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE,
    TerminateProcess,
};

/// Returns true when a process with `pid` exists.
///
/// Used to tell a hung daemon apart from a stale PID file.
pub fn is_process_alive(pid: u32) -> bool {
    with_process(pid, PROCESS_QUERY_LIMITED_INFORMATION, |_| true).unwrap_or(false)
}

/// Forcibly terminates a daemon that no longer answers on the pipe.
///
/// The mask window's bar registration dies with the process; the shell
/// reclaims the work area on its own.
pub fn kill_process(pid: u32) -> bool {
    with_process(pid, PROCESS_TERMINATE, |handle| {
        // SAFETY: `handle` was opened with PROCESS_TERMINATE.
        unsafe { TerminateProcess(handle, 1) }.is_ok()
    })
    .unwrap_or(false)
}

/// Opens `pid` with `access`, runs `f` and closes the handle again.
fn with_process<T>(
    pid: u32,
    access: PROCESS_ACCESS_RIGHTS,
    f: impl FnOnce(HANDLE) -> T,
) -> Option<T> {
    // SAFETY: OpenProcess either returns a handle we own or an error.
    let handle = unsafe { OpenProcess(access, false, pid) }.ok()?;
    let result = f(handle);
    // SAFETY: the handle is closed exactly once, here.
    unsafe {
        let _ = CloseHandle(handle);
    }
    Some(result)
}
