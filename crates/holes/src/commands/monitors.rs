/// Prints the full bounds of every monitor in enumeration order.
///
/// These are the rectangles `holes resolve --monitor` expects.
pub fn execute() {
    match holes_windows::monitor::enumerate_monitors() {
        Ok(monitors) => {
            for (i, m) in monitors.iter().enumerate() {
                println!("{i}  {},{},{},{}  {m}", m.x, m.y, m.width, m.height);
            }
            println!("{} monitor(s) found", monitors.len());
        }
        Err(e) => {
            eprintln!("Error: could not enumerate monitors: {e}");
            std::process::exit(1);
        }
    }
}
