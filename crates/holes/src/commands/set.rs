use clap::Args;
use holes_core::{Rect, geometry};

/// A selection rectangle in virtual-screen pixels.
#[derive(Args)]
pub struct SelectionArgs {
    /// Left edge of the selection
    pub x: i32,
    /// Top edge of the selection
    pub y: i32,
    /// Width of the selection
    pub width: i32,
    /// Height of the selection
    pub height: i32,
}

impl SelectionArgs {
    /// The selection rectangle, or exits when it is too small or out of
    /// range to resolve.
    pub fn checked_rect(&self) -> Rect {
        let selection = Rect::new(self.x, self.y, self.width, self.height);
        if let Err(rejection) = geometry::check_selection(&selection) {
            eprintln!("Error: {rejection}.");
            std::process::exit(1);
        }
        selection
    }
}

/// Asks the running daemon to reserve a strip for the selection.
pub fn execute(args: &SelectionArgs) {
    let selection = args.checked_rect();

    #[cfg(windows)]
    super::send::execute(holes_core::Command::SetHole { rect: selection });

    #[cfg(not(windows))]
    super::unsupported();
}
