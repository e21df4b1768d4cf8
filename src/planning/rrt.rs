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

// for i in 0..max_iterations:
//     loop:
//         Xrand = sample()
//         Xnearest = Nearest(tree, Xrand)
//         Xnew = steer(Xnearest, Xrand, step_length)
//         if not collides(Xnearest, Xnew): break
//     tree.insert(Xnew, parent = Xnearest)
//     if distance(Xnew, goal) < step_length:
//         terminal = Xnew
//         if stop_early: break
// path = walk parents from terminal, reversed

use crate::errors::{PlanError, PlanningResult};
use crate::tree::{Distance, Tree, VertexId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

/// Tuning knobs for a single planning run.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    /// Maximum edge length per extension, must be positive.
    pub step_length: f64,

    /// Number of tree-growth slots before the search gives up.
    pub max_iterations: u64,

    /// Terminate as soon as a goal-proximate vertex is found, instead of
    /// exploring through the full iteration budget.
    pub stop_early: bool,

    /// Cap on sampling attempts within a single slot. With `None` a slot
    /// resamples until it finds a collision-free extension, which does not
    /// terminate when no free extension exists.
    pub max_retries: Option<u64>,

    /// Seed for the run-scoped random generator. `None` draws entropy, a
    /// fixed value reproduces the exact tree and path.
    pub seed: Option<u64>,
}

/// How a planning run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanOutcome {
    /// A vertex within one step of the goal was found.
    Solved,

    /// The iteration budget ran out before reaching the goal.
    Exhausted,

    /// A slot hit `max_retries` without finding a collision-free extension.
    Stuck,
}

/// Everything a run produces: the outcome, the start-to-terminal path
/// (empty unless solved), the iteration index at which the terminal vertex
/// appeared (or the budget consumed on failure), and the full tree for
/// inspection or serialization.
#[derive(Debug)]
pub struct PlanResult<T> {
    pub outcome: PlanOutcome,
    pub path: Vec<T>,
    pub iterations: u64,
    pub tree: Tree<T>,
}

impl<T> PlanResult<T> {
    pub fn is_solved(&self) -> bool {
        self.outcome == PlanOutcome::Solved
    }
}

/// Attempts to extend the tree with one collision-free edge.
///
/// Samples, steers from the nearest vertex, and resamples as long as the
/// candidate edge collides. Returns the accepted state and its parent, or
/// None once `max_retries` rejected candidates have been drawn.
fn extend_tree<T, FS, FE, FC>(
    tree: &Tree<T>,
    rng: &mut StdRng,
    sample: &mut FS,
    extend: &mut FE,
    collides: &mut FC,
    step_length: f64,
    max_retries: Option<u64>,
) -> Option<(T, VertexId)>
where
    T: Distance,
    FS: FnMut(&mut StdRng) -> T,
    FE: FnMut(&T, &T, f64) -> T,
    FC: FnMut(&T, &T) -> bool,
{
    let mut attempts: u64 = 0;
    loop {
        if max_retries.is_some_and(|cap| attempts >= cap) {
            return None;
        }
        attempts += 1;

        let s = sample(rng);
        let nearest = tree.nearest(&s);
        let candidate = extend(tree.state(nearest), &s, step_length);
        debug_assert!(
            tree.state(nearest).distance(&candidate) <= step_length + 1e-9,
            "steering overshot the step length"
        );

        if !collides(tree.state(nearest), &candidate) {
            return Some((candidate, nearest));
        }
        trace!(attempts, "rejected colliding extension");
    }
}

/// Implementation of RRT planning.
///
/// Grows a tree from `start` by repeatedly sampling the configuration space,
/// steering from the nearest vertex toward the sample by at most
/// `config.step_length`, and inserting the result whenever the new edge is
/// collision free. The first vertex that lands strictly within one step of
/// `goal` becomes the solution terminal; later, closer vertices never
/// replace it.
///
/// # Parameters
///
/// - `start`: The starting state of type `T`
/// - `goal`: The goal state the search steers its proximity check against
/// - `sample`: Function to randomly sample the configuration space using the
///             run-scoped generator
/// - `extend`: Function returning a state at most `step_length` along the way
///             from the first state toward the second, and the second state
///             itself when it is already within reach
/// - `collides`: Function to determine whether the edge between two states is
///               blocked; the obstacle set is the closure's concern
/// - `config`: Planner tuning, see [`PlannerConfig`]
///
/// # Returns
///
/// A [`PlanResult`] carrying the outcome, the path (start to terminal,
/// empty when no solution was found), the iteration index of success (or
/// the consumed budget), and the grown tree.
///
/// # Errors
///
/// [`PlanError::InvalidStepLength`] if `config.step_length` is not positive,
/// and [`PlanError::EmptyIterationBudget`] if `config.max_iterations` is
/// zero while the goal is farther than one step from the start. Both are
/// reported before any sampling happens; running out of budget is not an
/// error.
pub fn rrt<T, FS, FE, FC>(
    start: &T,
    goal: &T,
    mut sample: FS,
    mut extend: FE,
    mut collides: FC,
    config: &PlannerConfig,
) -> PlanningResult<PlanResult<T>>
where
    T: Clone + Distance,
    FS: FnMut(&mut StdRng) -> T,
    FE: FnMut(&T, &T, f64) -> T,
    FC: FnMut(&T, &T) -> bool,
{
    if !(config.step_length > 0.0) {
        return Err(PlanError::InvalidStepLength(config.step_length));
    }
    if config.max_iterations == 0 && start.distance(goal) >= config.step_length {
        return Err(PlanError::EmptyIterationBudget);
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    debug!(
        step_length = config.step_length,
        max_iterations = config.max_iterations,
        stop_early = config.stop_early,
        "starting search"
    );

    let mut tree = Tree::new(start.clone());
    let mut terminal: Option<VertexId> = None;
    let mut found_at: u64 = 0;
    let mut stuck_at: Option<u64> = None;

    for i in 0..config.max_iterations {
        let Some((candidate, nearest)) = extend_tree(
            &tree,
            &mut rng,
            &mut sample,
            &mut extend,
            &mut collides,
            config.step_length,
            config.max_retries,
        ) else {
            warn!(iteration = i, "no collision-free extension found");
            stuck_at = Some(i);
            break;
        };

        let new_vertex = tree.insert(candidate, nearest);

        // First solution wins, strictly closer vertices found later do not
        // replace it.
        if terminal.is_none() && tree.state(new_vertex).distance(goal) < config.step_length {
            info!(iteration = i, "found a path");
            terminal = Some(new_vertex);
            found_at = i;
            if config.stop_early {
                break;
            }
        }
    }

    debug!(vertices = tree.size(), "search finished");

    let (outcome, iterations, path) = match (terminal, stuck_at) {
        (Some(id), _) => (PlanOutcome::Solved, found_at, tree.path(id)),
        (None, Some(at)) => (PlanOutcome::Stuck, at, Vec::new()),
        (None, None) => (PlanOutcome::Exhausted, config.max_iterations, Vec::new()),
    };

    Ok(PlanResult {
        outcome,
        path,
        iterations,
        tree,
    })
}

//
// Unit tests
//
