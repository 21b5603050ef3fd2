//! Multi-run evaluation protocol.
//!
//! Repeats an engine run under deterministic per-run seeds
//! (`base_seed + i`), synthesizes the reference front from the union of
//! all collected fronts, and averages the M1/M2/M3/Error metrics across
//! runs. Runs are independent; with the `parallel` feature they fan out
//! over rayon while the report stays identical to the sequential build,
//! since each run owns its seed and results are collected by run index.

use crate::instance::TspInstance;
use crate::metrics::{convergence_m1, coverage_m2, error_ratio, reference_front, spread_m3};
use crate::nsga2::{Nsga2Config, Nsga2Runner};
use crate::solution::{Cost, ParetoFront};
use crate::spea::{SpeaConfig, SpeaRunner};
use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Base seed of the evaluation protocol; run `i` is seeded `BASE_SEED + i`.
pub const BASE_SEED: u64 = 42;

/// Default number of repetitions per evaluation.
pub const DEFAULT_REPETITIONS: usize = 5;

/// A search engine that can run to completion under a caller-chosen seed.
///
/// The seam between the engines and the evaluation protocol: both configs
/// implement it, and anything else that produces a [`ParetoFront`]
/// deterministically from a seed can be evaluated the same way.
pub trait Engine: Sync {
    /// Algorithm label used in reports and exported records.
    fn name(&self) -> &'static str;

    /// Runs one full execution with the given seed.
    fn run_seeded(&self, instance: &TspInstance, seed: u64) -> ParetoFront;
}

impl Engine for Nsga2Config {
    fn name(&self) -> &'static str {
        "NSGA-II"
    }

    fn run_seeded(&self, instance: &TspInstance, seed: u64) -> ParetoFront {
        Nsga2Runner::run(instance, &self.clone().with_seed(seed))
    }
}

impl Engine for SpeaConfig {
    fn name(&self) -> &'static str {
        "SPEA"
    }

    fn run_seeded(&self, instance: &TspInstance, seed: u64) -> ParetoFront {
        SpeaRunner::run(instance, &self.clone().with_seed(seed))
    }
}

/// Aggregated result of a multi-run evaluation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationReport {
    /// Algorithm label, from [`Engine::name`].
    pub algorithm: String,

    /// Mean M1 (convergence) across runs.
    pub m1: f64,

    /// Mean M2 (coverage) across runs.
    pub m2: f64,

    /// Mean M3 (spread) across runs.
    pub m3: f64,

    /// Mean error ratio across runs.
    pub error: f64,

    /// Reference front synthesized from all runs of this evaluation.
    pub reference_front: Vec<Cost>,

    /// Raw per-run fronts, in run order. Kept so callers can merge
    /// evaluations (e.g. NSGA-II vs SPEA) into a combined reference front
    /// and rescore against it.
    pub fronts: Vec<Vec<Cost>>,
}

/// Runs `repetitions` seeded executions of `engine` and collects each
/// run's output front, in run order.
///
/// Returns `Err` if `repetitions` is zero.
pub fn run_repeated<E: Engine>(
    engine: &E,
    instance: &TspInstance,
    repetitions: usize,
    base_seed: u64,
) -> Result<Vec<Vec<Cost>>, String> {
    if repetitions == 0 {
        return Err("repetitions must be at least 1".into());
    }

    #[cfg(feature = "parallel")]
    let fronts = (0..repetitions)
        .into_par_iter()
        .map(|i| engine.run_seeded(instance, base_seed + i as u64).costs())
        .collect();

    #[cfg(not(feature = "parallel"))]
    let fronts = (0..repetitions)
        .map(|i| engine.run_seeded(instance, base_seed + i as u64).costs())
        .collect();

    Ok(fronts)
}

/// Full evaluation protocol: repeated runs, reference-front synthesis,
/// per-run metrics, arithmetic averaging.
pub fn evaluate_engine<E: Engine>(
    engine: &E,
    instance: &TspInstance,
    repetitions: usize,
    base_seed: u64,
) -> Result<EvaluationReport, String> {
    let fronts = run_repeated(engine, instance, repetitions, base_seed)?;
    let ytrue = reference_front(&fronts);

    let mut m1 = 0.0;
    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut error = 0.0;
    for front in &fronts {
        m1 += convergence_m1(front, &ytrue);
        m2 += coverage_m2(front, &ytrue);
        m3 += spread_m3(front);
        error += error_ratio(front, &ytrue);
    }
    let reps = repetitions as f64;

    Ok(EvaluationReport {
        algorithm: engine.name().to_string(),
        m1: m1 / reps,
        m2: m2 / reps,
        m3: m3 / reps,
        error: error / reps,
        reference_front: ytrue,
        fronts,
    })
}

/// Evaluates NSGA-II on an instance file with the default configuration.
pub fn evaluate_nsga2<P: AsRef<Path>>(
    path: P,
    repetitions: usize,
) -> Result<EvaluationReport, String> {
    let instance = TspInstance::from_file(path)?;
    evaluate_engine(&Nsga2Config::default(), &instance, repetitions, BASE_SEED)
}

/// Evaluates SPEA on an instance file with the default configuration.
pub fn evaluate_spea<P: AsRef<Path>>(
    path: P,
    repetitions: usize,
) -> Result<EvaluationReport, String> {
    let instance = TspInstance::from_file(path)?;
    evaluate_engine(&SpeaConfig::default(), &instance, repetitions, BASE_SEED)
}
