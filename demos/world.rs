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

//! Plan across a 10x10 world with a few box obstacles, write the accepted
//! edges and the found path to `results/graph.txt` and `results/path.txt`
//! (one comma-separated state per `-`-separated pair), and optionally render
//! the run with plotly.

use plotly::common::{Fill, Line, Marker, Mode};
use plotly::{Layout, Plot, Scatter};
use rrtplanning::obstacle::{edge_collides, BoxObstacle};
use rrtplanning::planning::rrt::{rrt, PlanOutcome, PlanResult, PlannerConfig};
use rrtplanning::space::{Point2D, SampleDomain};
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};

/// Persist the tree edges and the path in the flat text format the 2D
/// plotter script consumes.
fn write_results(result: &PlanResult<Point2D>) {
    fs::create_dir_all("results").expect("Could not create results directory");

    let mut graph =
        BufWriter::new(File::create("results/graph.txt").expect("Could not create graph.txt"));
    for (child, parent) in result.tree.edges() {
        writeln!(graph, "{child}-{parent}").expect("Could not write edge");
    }

    let mut path =
        BufWriter::new(File::create("results/path.txt").expect("Could not create path.txt"));
    for state in &result.path {
        write!(path, "{state}-").expect("Could not write path state");
    }
}

/// Visualize a run
fn visualize_rrt(obstacles: &[BoxObstacle], result: &PlanResult<Point2D>) {
    let mut plot = Plot::new();

    // Plot obstacles
    for obstacle in obstacles {
        let (bl, tr) = (obstacle.bottom_left(), obstacle.top_right());
        let trace = Scatter::new(
            vec![bl.x, tr.x, tr.x, bl.x, bl.x],
            vec![bl.y, bl.y, tr.y, tr.y, bl.y],
        )
        .fill(Fill::ToSelf)
        .fill_color("black")
        .line(Line::new().color("black"))
        .opacity(1.0);
        plot.add_trace(trace);
    }

    // Plot tree
    for (child, parent) in result.tree.edges() {
        let trace = Scatter::new(vec![child.x, parent.x], vec![child.y, parent.y])
            .mode(Mode::Lines)
            .line(Line::new().color("blue"));
        plot.add_trace(trace);
    }

    // Plot path
    let path_x: Vec<_> = result.path.iter().map(|state| state.x).collect();
    let path_y: Vec<_> = result.path.iter().map(|state| state.y).collect();
    let path_trace = Scatter::new(path_x, path_y)
        .mode(Mode::Lines)
        .line(Line::new().color("red").width(4.0));
    plot.add_trace(path_trace);

    // Plot start and end
    if let (Some(start), Some(end)) = (result.path.first(), result.path.last()) {
        let start_trace = Scatter::new(vec![start.x], vec![start.y])
            .mode(Mode::Markers)
            .marker(Marker::new().color("green").size(16));
        let end_trace = Scatter::new(vec![end.x], vec![end.y])
            .mode(Mode::Markers)
            .marker(Marker::new().color("yellow").size(16));
        plot.add_trace(start_trace);
        plot.add_trace(end_trace);
    }

    let layout = Layout::new()
        .title("RRT Path Finding Result".into())
        .show_legend(false)
        .width(750)
        .height(750)
        .x_axis(plotly::layout::Axis::new().title("X".into()))
        .y_axis(plotly::layout::Axis::new().title("Y".into()));

    plot.set_layout(layout);
    plot.show();
}

pub fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let (start, end) = match args.len() {
        1 => (Point2D::new(5.0, 5.0), Point2D::new(9.0, 9.5)),
        5 | 6 => {
            let start_x: f64 = args[1].parse().expect("Invalid start_x");
            let start_y: f64 = args[2].parse().expect("Invalid start_y");
            let end_x: f64 = args[3].parse().expect("Invalid end_x");
            let end_y: f64 = args[4].parse().expect("Invalid end_y");
            (Point2D::new(start_x, start_y), Point2D::new(end_x, end_y))
        }
        _ => {
            eprintln!("Usage: world [start_x start_y end_x end_y [show_plot]]");
            return;
        }
    };
    let show_plot: bool = args
        .get(5)
        .map(|arg| arg.parse().expect("Invalid show_plot argument; should be true or false"))
        .unwrap_or(false);

    println!("Start pose: ({}, {})", start.x, start.y);
    println!("End pose: ({}, {})", end.x, end.y);

    // Add a few rectangular obstacles to the world
    let obstacles = vec![
        BoxObstacle::new(Point2D::new(1.0, 1.0), Point2D::new(3.0, 3.0)),
        BoxObstacle::new(Point2D::new(8.0, 1.0), Point2D::new(9.0, 9.0)),
        BoxObstacle::new(Point2D::new(6.0, 6.0), Point2D::new(7.0, 7.0)),
    ];

    let domain = SampleDomain::new(Point2D::new(0.0, 0.0), Point2D::new(10.0, 10.0));

    // Constants for this particular run
    let config = PlannerConfig {
        step_length: 0.3,
        max_iterations: 20_000,
        stop_early: false,
        max_retries: None,
        seed: None,
    };

    // Define closures
    let sample_fn = |rng: &mut _| domain.sample(rng);
    let extend_fn = |from: &Point2D, toward: &Point2D, max_step: f64| from.steer(toward, max_step);
    let collides_fn = |from: &Point2D, to: &Point2D| edge_collides(&obstacles, from, to);

    let result = match rrt(&start, &end, sample_fn, extend_fn, collides_fn, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("RRT failed: {e}");
            return;
        }
    };

    match result.outcome {
        PlanOutcome::Solved => {
            println!("Found a path with {} iterations", result.iterations);
        }
        PlanOutcome::Exhausted => {
            println!("No path found within {} iterations", result.iterations);
        }
        PlanOutcome::Stuck => {
            println!("No collision-free extension found, giving up");
        }
    }

    write_results(&result);

    if show_plot {
        visualize_rrt(&obstacles, &result);
    }
}
