//! Pairwise collision physics for equal-mass hard discs
//!
//! Two pure functions:
//! - [`resolve_elastic`]: post-collision velocities for a perfectly elastic
//!   collision between equal masses
//! - [`separate_overlap`]: coarse positional correction for two discs that
//!   are already interpenetrating

use crate::simulation::boundary::Boundary;
use crate::simulation::states::{NVec2, Particle};

/// Resolve a perfectly elastic collision between two equal-mass discs.
///
/// Returns the post-collision velocities `(v1', v2')`. Requires the particle
/// centers to differ; coincident centers make the contact normal undefined
/// (prevented upstream by the spawn placement and the overlap correction,
/// not guarded here).
pub fn resolve_elastic(a: &Particle, b: &Particle) -> (NVec2, NVec2) {
    // Displacement from a to b and the center distance
    let delta = b.x - a.x;
    let dist = delta.norm();

    // Unit contact normal n (a -> b) and its perpendicular tangent t
    let n = delta / dist;
    let t = NVec2::new(-n.y, n.x);

    // Project both velocities onto the {n, t} frame
    let v1n = a.v.dot(&n);
    let v1t = a.v.dot(&t);
    let v2n = b.v.dot(&n);
    let v2t = b.v.dot(&t);

    // Equal masses: the normal components swap, the tangential components
    // are untouched (no restitution, no friction)
    let v1 = n * v2n + t * v1t;
    let v2 = n * v1n + t * v2t;

    (v1, v2)
}

/// Push two interpenetrating discs apart along the x-axis.
///
/// The left one moves left by exactly one radius and the right one right by
/// one radius, each only if doing so keeps the disc's own edge inside its
/// wall. Velocities are untouched. This is a coarse correction, not a
/// physically derived impulse, and no bounds clamping is applied afterwards:
/// in crowded configurations a disc can be nudged past the nominal chamber
/// extent, which is accepted.
pub fn separate_overlap(a: &Particle, b: &Particle, bounds: &Boundary) -> (NVec2, NVec2) {
    let r = a.radius;
    let mut xa = a.x;
    let mut xb = b.x;

    if a.x.x < b.x.x {
        if a.x.x - r > bounds.left {
            xa.x -= r;
        }
        if b.x.x + r < bounds.right {
            xb.x += r;
        }
    } else {
        if a.x.x + r < bounds.right {
            xa.x += r;
        }
        if b.x.x - r > bounds.left {
            xb.x -= r;
        }
    }

    (xa, xb)
}
