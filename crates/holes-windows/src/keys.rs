/// Virtual-key codes for named keys, matched case-insensitively.
const NAMED_KEYS: &[(&str, u32)] = &[
    ("ENTER", 0x0D),
    ("RETURN", 0x0D),
    ("TAB", 0x09),
    ("ESCAPE", 0x1B),
    ("ESC", 0x1B),
    ("SPACE", 0x20),
    ("BACKSPACE", 0x08),
    ("DELETE", 0x2E),
    ("DEL", 0x2E),
    ("INSERT", 0x2D),
    ("INS", 0x2D),
    ("HOME", 0x24),
    ("END", 0x23),
    ("PAGEUP", 0x21),
    ("PAGEDOWN", 0x22),
    ("PAUSE", 0x13),
    ("LEFT", 0x25),
    ("UP", 0x26),
    ("RIGHT", 0x27),
    ("DOWN", 0x28),
];

/// Resolves a key name from `keybindings.toml` to a virtual-key code.
///
/// Accepts single letters and digits, `F1` to `F24`, and the names in
/// [`NAMED_KEYS`].
pub fn vk_from_name(name: &str) -> Option<u32> {
    let upper = name.to_ascii_uppercase();

    if let [ch] = upper.as_bytes()
        && ch.is_ascii_alphanumeric()
    {
        // Letters and digits share their ASCII code with the VK code.
        return Some(u32::from(*ch));
    }

    if let Some(n) = upper.strip_prefix('F').and_then(|rest| rest.parse::<u32>().ok())
        && (1..=24).contains(&n)
    {
        return Some(0x70 + n - 1);
    }

    NAMED_KEYS
        .iter()
        .find(|(key, _)| *key == upper)
        .map(|(_, vk)| *vk)
}
