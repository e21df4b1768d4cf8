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

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use rrtplanning::obstacle::{edge_collides, BoxObstacle};
use rrtplanning::planning::rrt::{rrt, PlannerConfig};
use rrtplanning::space::{Point2D, SampleDomain};

fn run_rrt(stop_early: bool, max_iterations: u64, start: Point2D, goal: Point2D, grid_size: f64) {
    let domain = SampleDomain::new(Point2D::new(0.0, 0.0), Point2D::new(grid_size, grid_size));
    let obstacles = vec![BoxObstacle::new(
        Point2D::new(grid_size * 0.4, grid_size * 0.4),
        Point2D::new(grid_size * 0.6, grid_size * 0.6),
    )];

    let config = PlannerConfig {
        step_length: 1.0,
        max_iterations,
        stop_early,
        max_retries: Some(100_000),
        seed: Some(1),
    };

    let result = rrt(
        &start,
        &goal,
        |rng: &mut _| domain.sample(rng),
        |from: &Point2D, toward: &Point2D, max_step: f64| from.steer(toward, max_step),
        |from: &Point2D, to: &Point2D| edge_collides(&obstacles, from, to),
        &config,
    );

    assert!(result.is_ok(), "Expected Ok result, got Err");
    assert!(result.unwrap().is_solved());
}

fn bench_rrt(c: &mut Criterion) {
    let start = Point2D::new(1.0, 1.0);
    let end = Point2D::new(48.0, 48.0);
    let grid_size: f64 = 50.0;
    c.bench_function("rrt", |b| {
        b.iter(|| run_rrt(true, 100_000, start, end, grid_size));
    });
}

fn bench_rrt_full_budget(c: &mut Criterion) {
    let start = Point2D::new(1.0, 1.0);
    let end = Point2D::new(18.0, 18.0);
    let grid_size: f64 = 20.0;
    c.bench_function("rrt_full_budget", |b| {
        b.iter(|| run_rrt(false, 5_000, start, end, grid_size));
    });
}

criterion_group!(benches, bench_rrt, bench_rrt_full_budget);
criterion_main!(benches);
