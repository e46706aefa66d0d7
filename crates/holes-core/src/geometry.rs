//! Edge resolution for reserved strips.
//!
//! Pure functions over rectangles: given a user selection and the
//! monitor layout, decide which monitor edge the selection snaps to and
//! how thick the reserved strip should be. Nothing here touches the OS,
//! so every rule is unit-tested directly.

use crate::config::DockingConfig;
use crate::rect::COORD_LIMIT;
use crate::{Edge, Rect};

/// Smallest selection side, in pixels, worth resolving.
pub const MIN_SELECTION: i32 = 2;

/// The resolved placement of a reserved strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockSpec {
    /// Monitor edge the strip is docked to.
    pub edge: Edge,
    /// Full bounds of the owning monitor.
    pub monitor: Rect,
    /// Depth of the strip in pixels, measured perpendicular to the edge.
    pub thickness: i32,
}

/// Why a selection could not be turned into a [`DockSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The selection is smaller than [`MIN_SELECTION`] on a side.
    TooSmall { width: i32, height: i32 },
    /// A coordinate or size exceeds [`COORD_LIMIT`].
    OutOfRange,
    /// The monitor layout was empty.
    NoMonitors,
    /// The selection's nearest side is further than the snap threshold.
    TooFarFromEdge { distance: i32, threshold: i32 },
    /// The strip would be thinner than the minimum thickness.
    TooThin { thickness: i32, minimum: i32 },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooSmall { width, height } => write!(
                f,
                "the selection must be at least {MIN_SELECTION}x{MIN_SELECTION} pixels \
                 (got {width}x{height})"
            ),
            Self::OutOfRange => write!(
                f,
                "selection coordinates must be within +/-{COORD_LIMIT} pixels"
            ),
            Self::NoMonitors => write!(f, "no monitors available"),
            Self::TooFarFromEdge {
                distance,
                threshold,
            } => write!(
                f,
                "selection is {distance}px from the nearest edge (snap threshold {threshold}px)"
            ),
            Self::TooThin { thickness, minimum } => {
                write!(f, "strip would be {thickness}px thick (minimum {minimum}px)")
            }
        }
    }
}

impl DockSpec {
    /// Monitor dimension along the strip's depth axis.
    ///
    /// This is the upper bound for [`DockSpec::thickness`].
    pub fn max_thickness(&self) -> i32 {
        depth_limit(self.edge, &self.monitor)
    }

    /// The rectangle to propose to the shell: anchored to the monitor
    /// side, spanning the full length of the edge, `thickness` deep.
    pub fn desired_rect(&self) -> Rect {
        let m = &self.monitor;
        let t = self.thickness;
        match self.edge {
            Edge::Left => Rect::new(m.left(), m.top(), t, m.height),
            Edge::Right => Rect::new(m.right() - t, m.top(), t, m.height),
            Edge::Top => Rect::new(m.left(), m.top(), m.width, t),
            Edge::Bottom => Rect::new(m.left(), m.bottom() - t, m.width, t),
        }
    }

    /// Re-derives the thickness from the strip window's current bounds,
    /// clamped to `[min_thickness, max_thickness()]`.
    ///
    /// Used when a manual resize gesture ends.
    pub fn resync_thickness(&mut self, bounds: &Rect, min_thickness: i32) {
        let candidate = depth_of(self.edge, bounds);
        self.thickness = candidate.min(self.max_thickness()).max(min_thickness);
    }
}

/// Filters selections before they reach [`resolve`]: both sides must be
/// at least [`MIN_SELECTION`] pixels and every value within range.
pub fn check_selection(selection: &Rect) -> Result<(), Rejection> {
    if !selection.is_in_range() {
        return Err(Rejection::OutOfRange);
    }
    if selection.width < MIN_SELECTION || selection.height < MIN_SELECTION {
        return Err(Rejection::TooSmall {
            width: selection.width,
            height: selection.height,
        });
    }
    Ok(())
}

/// Resolves a selection into a docked strip placement.
///
/// 1. Pick the monitor the selection overlaps most (or the nearest one
///    when it overlaps none).
/// 2. Measure the distance from each selection side to the matching
///    monitor side.
/// 3. Reject if the closest side is further than `snap_threshold`.
/// 4. Choose among the closest edges, preferring Top/Bottom for wide
///    selections and Left/Right for tall ones.
/// 5. Take the selection's depth along that edge, clamped to the
///    monitor, and reject it if it falls below `min_thickness`.
pub fn resolve(
    selection: Rect,
    monitors: &[Rect],
    policy: &DockingConfig,
) -> Result<DockSpec, Rejection> {
    if !selection.is_in_range() {
        return Err(Rejection::OutOfRange);
    }
    let monitor = owning_monitor(&selection, monitors).ok_or(Rejection::NoMonitors)?;

    let distances = edge_distances(&selection, &monitor);
    let min = min_distance(&distances);

    if min > policy.snap_threshold {
        return Err(Rejection::TooFarFromEdge {
            distance: min,
            threshold: policy.snap_threshold,
        });
    }

    let edge = pick_edge(&distances, &selection);
    let thickness = depth_of(edge, &selection).min(depth_limit(edge, &monitor));

    if thickness < policy.min_thickness {
        return Err(Rejection::TooThin {
            thickness,
            minimum: policy.min_thickness,
        });
    }

    Ok(DockSpec {
        edge,
        monitor,
        thickness,
    })
}

/// Finds the monitor that owns a selection.
///
/// The monitor with the largest overlap wins; when the selection lies
/// outside every monitor, the nearest one is used instead. Ties keep the
/// earliest monitor in enumeration order.
pub fn owning_monitor(selection: &Rect, monitors: &[Rect]) -> Option<Rect> {
    let mut best: Option<(Rect, i64)> = None;
    for monitor in monitors {
        let overlap = selection.intersection_area(monitor);
        if overlap > 0 && best.is_none_or(|(_, area)| overlap > area) {
            best = Some((*monitor, overlap));
        }
    }
    if let Some((monitor, _)) = best {
        return Some(monitor);
    }

    monitors
        .iter()
        .enumerate()
        .min_by_key(|(i, m)| (selection.distance_sq(m), *i))
        .map(|(_, m)| *m)
}

/// Shrinks `rect` to `thickness` along the edge's normal axis, keeping
/// the side that touches the monitor edge.
///
/// The shell's position query returns a full-size rectangle, so this
/// has to run on its result, not on the proposal.
pub fn clamp_to_edge(rect: Rect, edge: Edge, thickness: i32) -> Rect {
    let (mut l, mut t, mut r, mut b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    match edge {
        Edge::Left => r = l.saturating_add(thickness),
        Edge::Right => l = r.saturating_sub(thickness),
        Edge::Top => b = t.saturating_add(thickness),
        Edge::Bottom => t = b.saturating_sub(thickness),
    }
    Rect::from_ltrb(l, t, r, b)
}

/// Depth of `rect` measured perpendicular to `edge`.
pub fn depth_of(edge: Edge, rect: &Rect) -> i32 {
    if edge.is_horizontal() {
        rect.height
    } else {
        rect.width
    }
}

fn depth_limit(edge: Edge, monitor: &Rect) -> i32 {
    depth_of(edge, monitor)
}

/// Distances from each selection side to the monitor side, in
/// [`Edge::PRIORITY`] order. Saturates at `i32::MAX`.
fn edge_distances(selection: &Rect, monitor: &Rect) -> [(Edge, i32); 4] {
    Edge::PRIORITY.map(|edge| {
        let (from, to) = match edge {
            Edge::Top => (selection.top(), monitor.top()),
            Edge::Bottom => (monitor.bottom(), selection.bottom()),
            Edge::Left => (selection.left(), monitor.left()),
            Edge::Right => (monitor.right(), selection.right()),
        };
        let distance = (i64::from(from) - i64::from(to)).abs();
        (edge, i32::try_from(distance).unwrap_or(i32::MAX))
    })
}

fn min_distance(distances: &[(Edge, i32); 4]) -> i32 {
    distances.iter().map(|(_, d)| *d).min().unwrap_or(i32::MAX)
}

fn pick_edge(distances: &[(Edge, i32); 4], selection: &Rect) -> Edge {
    let min = min_distance(distances);
    let wide = selection.width >= selection.height;

    distances
        .iter()
        .find(|(edge, d)| *d == min && edge.is_horizontal() == wide)
        .or_else(|| distances.iter().find(|(_, d)| *d == min))
        .map_or(distances[0].0, |(edge, _)| *edge)
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
