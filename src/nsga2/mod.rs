//! NSGA-II: elitist multi-objective search with rank-and-crowding
//! environmental selection.
//!
//! Each generation non-dominated-sorts the population, rebuilds it by
//! appending whole fronts in rank order (crowding-truncating the last
//! admitted front), then breeds the next generation from a rank + crowding
//! tournament over the survivors.
//!
//! # Key Types
//!
//! - [`Nsga2Config`]: algorithm parameters with builder-style setters
//! - [`Nsga2Runner`]: executes the generational loop
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
mod runner;

pub use config::Nsga2Config;
pub use runner::Nsga2Runner;
