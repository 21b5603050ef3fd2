//! Bi-objective Traveling Salesman Problem solved by Pareto-based
//! evolutionary search.
//!
//! Given `N` cities and two independent distance matrices, the crate
//! searches for an approximation of the Pareto front: the set of tours
//! that are mutually non-dominated under the two cycle-cost objectives.
//! Two engines share the same genetic and dominance machinery and differ
//! only in environmental selection:
//!
//! - **NSGA-II** ([`nsga2`]): generational loop with non-dominated sorting,
//!   crowding-distance truncation, and rank + crowding tournament selection.
//! - **SPEA** ([`spea`]): generational loop maintaining a bounded external
//!   archive truncated by strength/fitness ranking.
//!
//! The [`evaluation`] module repeats an engine run across deterministic
//! seeds, synthesizes a reference front from the union of all outputs, and
//! scores each run with the M1/M2/M3/Error quality metrics.
//!
//! # Example
//!
//! ```
//! use motsp::instance::TspInstance;
//! use motsp::nsga2::{Nsga2Config, Nsga2Runner};
//!
//! let instance = TspInstance::from_matrices(
//!     vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 1.0], vec![2.0, 1.0, 0.0]],
//!     vec![vec![0.0, 2.0, 1.0], vec![2.0, 0.0, 2.0], vec![1.0, 2.0, 0.0]],
//! ).unwrap();
//!
//! let config = Nsga2Config::default()
//!     .with_population_size(20)
//!     .with_generations(10)
//!     .with_seed(42);
//!
//! let front = Nsga2Runner::run(&instance, &config);
//! assert!(!front.solutions.is_empty());
//! ```
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Zitzler & Thiele (1999), *Multiobjective Evolutionary Algorithms: A
//!   Comparative Case Study and the Strength Pareto Approach*

pub mod evaluation;
pub mod export;
pub mod instance;
pub mod metrics;
pub mod nsga2;
pub mod operators;
pub mod pareto;
pub mod random;
pub mod selection;
pub mod solution;
pub mod spea;

pub use evaluation::{evaluate_nsga2, evaluate_spea, EvaluationReport};
pub use instance::TspInstance;
pub use solution::{Cost, ParetoFront, Solution};
