// MIT License
//
// Copyright (c) 2024 Erik Holum
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Concrete 2D state space: points in the plane and a rectangular sampling
//! domain.

use crate::tree::Distance;
use rand::Rng;
use std::fmt;

/// Basic 2D point class for representing states in the plane.
#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// Returns a point at most `max_step` along the line from `self` toward
    /// `toward`.
    ///
    /// If `toward` is already within `max_step` it is returned unchanged, so
    /// steering never overshoots and never truncates a reachable target.
    pub fn steer(&self, toward: &Self, max_step: f64) -> Self {
        let length = self.distance(toward);
        if length <= max_step {
            return *toward;
        }
        let scale = max_step / length;
        Point2D::new(
            self.x + (toward.x - self.x) * scale,
            self.y + (toward.y - self.y) * scale,
        )
    }
}

// Norm distance function for 2D points
impl Distance for Point2D {
    fn distance(&self, other: &Point2D) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

// Comma-separated coordinates, the row format of the results files
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis-aligned rectangle to draw uniform samples from.
///
/// The bounds are planner-run configuration, not constants of the state
/// type; construct one per planning scenario.
#[derive(Debug, Clone, Copy)]
pub struct SampleDomain {
    pub min: Point2D,
    pub max: Point2D,
}

impl SampleDomain {
    pub fn new(min: Point2D, max: Point2D) -> Self {
        SampleDomain { min, max }
    }

    /// Function for randomly sampling the 2-D plane within the bounds.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point2D {
        Point2D::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert!(approx_eq!(f64, a.distance(&b), 5.0));
        assert!(approx_eq!(f64, b.distance(&a), 5.0));
        assert!(approx_eq!(f64, a.distance(&a), 0.0));
    }

    #[test]
    fn test_steer_clamps_to_step() {
        let from = Point2D::new(0.0, 0.0);
        let toward = Point2D::new(10.0, 0.0);

        let stepped = from.steer(&toward, 1.0);
        assert!(approx_eq!(f64, stepped.x, 1.0));
        assert!(approx_eq!(f64, stepped.y, 0.0));
        assert!(approx_eq!(f64, from.distance(&stepped), 1.0));
    }

    #[test]
    fn test_steer_returns_target_within_reach() {
        let from = Point2D::new(0.0, 0.0);
        let near = Point2D::new(0.2, 0.1);

        // Within one step the target itself comes back, untruncated
        assert_eq!(from.steer(&near, 1.0), near);

        // Exactly one step away is still within reach
        let exact = Point2D::new(1.0, 0.0);
        assert_eq!(from.steer(&exact, 1.0), exact);

        // Coincident points steer nowhere
        assert_eq!(from.steer(&from, 1.0), from);
    }

    #[test]
    fn test_sample_domain_respects_bounds() {
        let domain = SampleDomain::new(Point2D::new(-1.0, 2.0), Point2D::new(4.0, 3.0));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let p = domain.sample(&mut rng);
            assert!(p.x >= -1.0 && p.x <= 4.0);
            assert!(p.y >= 2.0 && p.y <= 3.0);
        }
    }
}
