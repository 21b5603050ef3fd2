//! SPEA: strength-Pareto search with a bounded external archive.
//!
//! Each generation unions the archive with the working population,
//! assigns strength and fitness over the union, truncates the
//! lowest-fitness prefix into the next archive, and breeds the next
//! population from parents drawn out of the archive.
//!
//! # Key Types
//!
//! - [`SpeaConfig`]: algorithm parameters with builder-style setters
//! - [`SpeaRunner`]: executes the generational loop
//!
//! # References
//!
//! - Zitzler & Thiele (1999), *Multiobjective Evolutionary Algorithms: A
//!   Comparative Case Study and the Strength Pareto Approach*

mod config;
mod runner;

pub use config::SpeaConfig;
pub use runner::{fitness_values, strength_values, SpeaRunner};
