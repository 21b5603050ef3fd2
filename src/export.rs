//! Tabular export of fronts and aggregated metrics.
//!
//! Two CSV shapes, kept compatible with the original result files:
//! per-front objective pairs under `Objetivo 1,Objetivo 2`, and one
//! metrics row per algorithm/instance under
//! `Algoritmo,Instancia,M1,M2,M3,Error`.

use crate::solution::Cost;
use std::fs;
use std::path::Path;

/// One aggregated metrics row for the comparison table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRecord {
    /// Algorithm label, e.g. `"NSGA-II"`.
    pub algorithm: String,

    /// Instance label, e.g. `"KROAB100"`.
    pub instance: String,

    /// Mean convergence metric.
    pub m1: f64,

    /// Mean coverage metric.
    pub m2: f64,

    /// Mean spread metric.
    pub m3: f64,

    /// Mean error ratio.
    pub error: f64,
}

/// Writes a front as a two-column CSV with header `Objetivo 1,Objetivo 2`.
pub fn write_front_csv<P: AsRef<Path>>(front: &[Cost], path: P) -> Result<(), String> {
    let mut out = String::from("Objetivo 1,Objetivo 2\n");
    for cost in front {
        out.push_str(&format!("{},{}\n", cost[0], cost[1]));
    }
    write_file(path.as_ref(), &out)
}

/// Writes metric records as a CSV with header
/// `Algoritmo,Instancia,M1,M2,M3,Error`.
pub fn write_metrics_csv<P: AsRef<Path>>(
    records: &[MetricsRecord],
    path: P,
) -> Result<(), String> {
    let mut out = String::from("Algoritmo,Instancia,M1,M2,M3,Error\n");
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.algorithm, r.instance, r.m1, r.m2, r.m3, r.error
        ));
    }
    write_file(path.as_ref(), &out)
}

fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|e| format!("cannot write {}: {e}", path.display()))
}
