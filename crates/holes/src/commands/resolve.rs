use clap::Args;
use holes_core::{HoleError, Rect, config, geometry};

use super::set::SelectionArgs;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Monitor bounds as X,Y,W,H; repeat for every monitor. Defaults to
    /// the live layout.
    #[arg(long = "monitor", value_name = "X,Y,W,H", value_parser = parse_rect, allow_hyphen_values = true)]
    pub monitors: Vec<Rect>,
}

/// Dry run of edge resolution: prints the strip a selection would
/// reserve without touching the shell.
pub fn execute(args: &ResolveArgs) {
    let policy = config::load().docking;
    let selection = args.selection.checked_rect();

    let monitors = if args.monitors.is_empty() {
        live_monitors()
    } else {
        args.monitors.clone()
    };

    match geometry::resolve(selection, &monitors, &policy) {
        Ok(spec) => {
            println!("Selection  {selection}");
            println!("Monitor    {}", spec.monitor);
            println!("Edge       {}", spec.edge);
            println!("Thickness  {}px", spec.thickness);
            println!("Strip      {}", spec.desired_rect());
        }
        Err(rejection) => {
            eprintln!("{}", HoleError::from(rejection).user_message());
            eprintln!("Reason: {rejection}");
            std::process::exit(1);
        }
    }
}

#[cfg(windows)]
fn live_monitors() -> Vec<Rect> {
    match holes_windows::monitor::enumerate_monitors() {
        Ok(monitors) => monitors,
        Err(e) => {
            eprintln!("Error: could not enumerate monitors: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(windows))]
fn live_monitors() -> Vec<Rect> {
    eprintln!("Error: no live monitor layout on this platform; pass --monitor X,Y,W,H.");
    std::process::exit(1);
}

/// Parses `X,Y,W,H` into a rectangle.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in {s:?}: {e}"))?;

    match parts[..] {
        [_, _, w, h] if w <= 0 || h <= 0 => {
            Err(format!("monitor {s:?} must have a positive size"))
        }
        [x, y, w, h] => {
            let rect = Rect::new(x, y, w, h);
            if rect.is_in_range() {
                Ok(rect)
            } else {
                Err(format!("monitor {s:?} is outside the virtual screen range"))
            }
        }
        _ => Err(format!("expected X,Y,W,H, got {s:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rect_accepts_negative_origin() {
        assert_eq!(
            parse_rect("-1920, 0, 1920, 1080"),
            Ok(Rect::new(-1920, 0, 1920, 1080))
        );
    }

    #[test]
    fn parse_rect_rejects_wrong_arity_and_empty_size() {
        assert!(parse_rect("0,0,1920").is_err());
        assert!(parse_rect("0,0,0,1080").is_err());
        assert!(parse_rect("a,b,c,d").is_err());
    }

    #[test]
    fn parse_rect_rejects_out_of_range_bounds() {
        assert!(parse_rect("2147483000,0,1920,1080").is_err());
        assert!(parse_rect("0,0,1920,2147483647").is_err());
    }
}
