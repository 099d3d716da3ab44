//! mlzoo-boundaries: deterministic synthetic data and decision boundaries
//! for classic classifier diagrams.
//!
//! This crate generates small, seeded 2D datasets (Gaussian clusters) and
//! closed-form decision boundaries for six classic classification models:
//! LDA, QDA, logistic regression, multinomial logistic regression, the
//! perceptron, and a ridge classifier. Every scene is bit-reproducible:
//! the same seed and call order always yields the same points and the same
//! boundary, so a diagram looks identical on every load.
//!
//! The design favors small, testable modules: a generator object owns all
//! PRNG state, solvers are pure functions of their declared inputs, and the
//! renderer-facing hand-off is plain numeric data (points, line
//! coefficients, segments, a classify function).
pub mod boundary;
pub mod config;
pub mod data;
pub mod error;
pub mod math;
pub mod report;
pub mod rng;
pub mod scene;
pub mod stats;
