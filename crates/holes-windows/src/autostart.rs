//! Start-on-logon via the per-user Run key.
//!
//! The value `DesktopHoles` under
//! `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Run`
//! holds `"<exe>" start`. HKCU needs no elevation.

use windows::Win32::Foundation::ERROR_FILE_NOT_FOUND;
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, KEY_SET_VALUE, REG_SAM_FLAGS, REG_SZ, RegCloseKey,
    RegDeleteValueW, RegOpenKeyExW, RegQueryValueExW, RegSetValueExW,
};
use windows::core::PCWSTR;

const RUN_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Run";
const VALUE_NAME: &str = "DesktopHoles";

/// Registers the daemon to start on logon.
pub fn enable() -> Result<(), String> {
    let command = start_command()?;
    with_run_key(KEY_SET_VALUE, |key| set_value(key, &command))
}

/// Removes the logon entry. Succeeds when there was none.
pub fn disable() -> Result<(), String> {
    with_run_key(KEY_SET_VALUE, delete_value)
}

pub fn is_enabled() -> bool {
    with_run_key(KEY_QUERY_VALUE, |key| Ok(value_exists(key))).unwrap_or(false)
}

/// `"<exe>" start`, quoted so paths with spaces survive.
fn start_command() -> Result<String, String> {
    let exe = std::env::current_exe().map_err(|e| format!("could not resolve exe path: {e}"))?;
    Ok(format!("\"{}\" start", exe.display()))
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Opens the Run key, runs `f` and closes the key on every path.
fn with_run_key<T>(
    access: REG_SAM_FLAGS,
    f: impl FnOnce(HKEY) -> Result<T, String>,
) -> Result<T, String> {
    let path = wide(RUN_KEY);
    let mut key = HKEY::default();
    // SAFETY: `path` is NUL-terminated and `key` is a valid out-parameter.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_CURRENT_USER,
            PCWSTR(path.as_ptr()),
            None,
            access,
            &mut key,
        )
    };
    if status.is_err() {
        return Err(format!("could not open registry key: {status:?}"));
    }

    let result = f(key);
    // SAFETY: `key` was opened above and is closed once.
    let _ = unsafe { RegCloseKey(key) };
    result
}

fn set_value(key: HKEY, value: &str) -> Result<(), String> {
    let name = wide(VALUE_NAME);
    let data = wide(value);
    // SAFETY: a u16 buffer viewed as bytes; length is doubled accordingly.
    let bytes: &[u8] =
        unsafe { std::slice::from_raw_parts(data.as_ptr().cast(), data.len() * 2) };
    // SAFETY: name is NUL-terminated, bytes covers the REG_SZ payload.
    let status = unsafe { RegSetValueExW(key, PCWSTR(name.as_ptr()), None, REG_SZ, Some(bytes)) };
    if status.is_err() {
        return Err(format!("could not write registry value: {status:?}"));
    }
    Ok(())
}

fn delete_value(key: HKEY) -> Result<(), String> {
    let name = wide(VALUE_NAME);
    // SAFETY: name is NUL-terminated.
    let status = unsafe { RegDeleteValueW(key, PCWSTR(name.as_ptr())) };
    if status.is_err() && status != ERROR_FILE_NOT_FOUND {
        return Err(format!("could not delete registry value: {status:?}"));
    }
    Ok(())
}

fn value_exists(key: HKEY) -> bool {
    let name = wide(VALUE_NAME);
    // SAFETY: a query without a data buffer only checks existence.
    let status = unsafe { RegQueryValueExW(key, PCWSTR(name.as_ptr()), None, None, None, None) };
    status.is_ok()
}
