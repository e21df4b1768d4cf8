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

//! Axis-aligned box obstacles and the edge collision gate.

use crate::space::Point2D;

/// Simple representation of a box in 2D defined by bottom left and top right
/// points.
#[derive(Debug, Clone, Copy)]
pub struct BoxObstacle {
    bottom_left: Point2D,
    top_right: Point2D,
}

impl BoxObstacle {
    pub fn new(bottom_left: Point2D, top_right: Point2D) -> Self {
        BoxObstacle {
            bottom_left,
            top_right,
        }
    }

    pub fn bottom_left(&self) -> Point2D {
        self.bottom_left
    }

    pub fn top_right(&self) -> Point2D {
        self.top_right
    }

    /// Whether the point lies within the box, bounds inclusive.
    pub fn contains(&self, p: &Point2D) -> bool {
        p.x >= self.bottom_left.x
            && p.x <= self.top_right.x
            && p.y >= self.bottom_left.y
            && p.y <= self.top_right.y
    }

    /// Whether the edge from `_from` to `to` crosses the box.
    ///
    /// Assumes the step is small compared to the obstacle, so only the far
    /// endpoint is tested.
    pub fn blocks(&self, _from: &Point2D, to: &Point2D) -> bool {
        self.contains(to)
    }
}

/// Detects collision between the obstacle set and an edge between two
/// connected states. The edge is rejected as soon as any obstacle reports a
/// hit; obstacles are tested independently.
pub fn edge_collides(obstacles: &[BoxObstacle], from: &Point2D, to: &Point2D) -> bool {
    obstacles.iter().any(|obstacle| obstacle.blocks(from, to))
}
