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

//! Motion planning with Rapidly-exploring Random Trees.
//!
//! The [`planning::rrt::rrt`] entry point grows a [`tree::Tree`] of reachable
//! states from a start state toward a goal state, accepting only edges that
//! pass a caller-supplied collision gate. State spaces plug in through the
//! [`tree::Distance`] trait plus sampling and steering closures, so the
//! planner is not tied to any particular configuration space. A concrete 2D
//! state, sampling domain, and box obstacle live in [`space`] and
//! [`obstacle`] for plane planning out of the box.

pub mod errors;
pub mod obstacle;
pub mod planning;
pub mod space;
pub mod tree;
