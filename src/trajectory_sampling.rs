//! Playback resampling of a computed trajectory.
//!
//! A renderer replays the flight on its own frame cadence, which is
//! independent of the integrator's time step. This module interpolates
//! the sample sequence onto that cadence; the sequence itself is
//! read-only here.

use crate::trajectory_solver::TrajectoryPoint;

/// Linearly interpolate the trajectory at time `t`.
///
/// Clamps to the first/last sample outside the recorded time span;
/// returns `None` for an empty sequence. Kinematic fields and the
/// diagnostic force magnitudes are all interpolated component-wise.
pub fn point_at_time(points: &[TrajectoryPoint], t: f64) -> Option<TrajectoryPoint> {
    let first = points.first()?;
    let last = points.last()?;

    if t <= first.t {
        return Some(*first);
    }
    if t >= last.t {
        return Some(*last);
    }

    // Binary search for the bracketing interval.
    let mut left = 0;
    let mut right = points.len() - 1;
    while right - left > 1 {
        let mid = (left + right) / 2;
        if points[mid].t <= t {
            left = mid;
        } else {
            right = mid;
        }
    }

    let a = &points[left];
    let b = &points[right];
    if (b.t - a.t).abs() < f64::EPSILON {
        return Some(*a);
    }

    let frac = (t - a.t) / (b.t - a.t);
    let lerp = |x: f64, y: f64| x + frac * (y - x);

    Some(TrajectoryPoint {
        x: lerp(a.x, b.x),
        y: lerp(a.y, b.y),
        t,
        vx: lerp(a.vx, b.vx),
        vy: lerp(a.vy, b.vy),
        speed: lerp(a.speed, b.speed),
        drag_force: lerp(a.drag_force, b.drag_force),
        magnus_force: lerp(a.magnus_force, b.magnus_force),
    })
}

/// Resample the whole flight at a fixed `interval` (seconds between
/// frames), from t = 0 through the final recorded time inclusive.
///
/// Non-positive intervals and empty inputs yield an empty output.
pub fn resample_at_interval(points: &[TrajectoryPoint], interval: f64) -> Vec<TrajectoryPoint> {
    if interval <= 0.0 || points.is_empty() {
        return Vec::new();
    }

    let end = match points.last() {
        Some(p) => p.t,
        None => return Vec::new(),
    };

    let n_frames = (end / interval).floor() as usize + 1;
    let mut frames = Vec::with_capacity(n_frames + 1);
    for i in 0..n_frames {
        if let Some(p) = point_at_time(points, i as f64 * interval) {
            frames.push(p);
        }
    }

    // Always close the playback on the impact sample.
    let needs_close = frames.last().map_or(true, |p| p.t < end);
    if needs_close {
        if let Some(p) = point_at_time(points, end) {
            frames.push(p);
        }
    }

    frames
}
