//! Rectangular chamber walls with a tolerance margin
//!
//! A particle approaching a wall closer than `radius + tol` has the velocity
//! component pointing at that wall flipped inward. The four wall checks run
//! in a fixed first-match-wins order (right, left, upper, lower): a particle
//! sitting near two walls at once bounces off only the first-matched axis
//! that frame. This asymmetry is a known simplification of the reference
//! behavior and is kept as-is.

use crate::simulation::states::Particle;

/// Axis-aligned chamber extents plus the contact tolerance margin.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub left: f64, // left wall x
    pub right: f64, // right wall x
    pub lower: f64, // lower wall y
    pub upper: f64, // upper wall y
    pub tol: f64, // tolerance margin, radius / 10
}

impl Boundary {
    /// Build a boundary for discs of the given radius; `tol = radius / 10`.
    pub fn from_extents(left: f64, right: f64, lower: f64, upper: f64, radius: f64) -> Self {
        Self {
            left,
            right,
            lower,
            upper,
            tol: radius / 10.0,
        }
    }

    /// Chamber side length (the chamber is square: right-left == upper-lower).
    pub fn side(&self) -> f64 {
        self.right - self.left
    }

    /// Flip the particle's velocity inward if it is clipping a wall.
    ///
    /// At most one axis is corrected per call. The flip forces the sign
    /// (`-|vx|` at the right wall, `+|vx|` at the left, and likewise for y),
    /// so a particle already moving inward is left unchanged and a repeated
    /// check without motion cannot flip it back.
    pub fn reflect(&self, p: &mut Particle) {
        let r = p.radius;
        let d = self.tol;
        if p.x.x > self.right - r - d {
            p.v.x = -p.v.x.abs();
        } else if p.x.x < self.left + r + d {
            p.v.x = p.v.x.abs();
        } else if p.x.y > self.upper - r - d {
            p.v.y = -p.v.y.abs();
        } else if p.x.y < self.lower + r + d {
            p.v.y = p.v.y.abs();
        }
    }
}
