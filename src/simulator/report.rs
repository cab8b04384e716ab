//! Simulation report generation.

use crate::config::GameConfig;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one autopilot run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub seed: u64,
    pub score: u32,
    pub ticks: u64,
    pub jumps: u64,
    /// Still flying when the tick limit was reached.
    pub timed_out: bool,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    /// Rules every run was stepped with
    pub game: GameConfig,
    pub num_runs: u32,
    pub runs_crashed: u32,
    pub runs_timed_out: u32,
    pub avg_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub avg_ticks: f64,
    pub score_distribution: BTreeMap<u32, u32>,
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(game: GameConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let runs_timed_out = runs.iter().filter(|r| r.timed_out).count() as u32;

        let (avg_score, avg_ticks) = if runs.is_empty() {
            (0.0, 0.0)
        } else {
            (
                runs.iter().map(|r| r.score as f64).sum::<f64>() / num_runs as f64,
                runs.iter().map(|r| r.ticks as f64).sum::<f64>() / num_runs as f64,
            )
        };

        let mut score_distribution = BTreeMap::new();
        for run in &runs {
            *score_distribution.entry(run.score).or_insert(0) += 1;
        }

        Self {
            game,
            num_runs,
            runs_crashed: num_runs - runs_timed_out,
            runs_timed_out,
            avg_score,
            min_score: runs.iter().map(|r| r.score).min().unwrap_or(0),
            max_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks,
            score_distribution,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Runs:        {}\n", self.num_runs));
        out.push_str(&format!(
            "Crashed:     {} ({} timed out)\n",
            self.runs_crashed, self.runs_timed_out
        ));
        out.push_str(&format!(
            "Score:       avg {:.2}, min {}, max {}\n",
            self.avg_score, self.min_score, self.max_score
        ));
        out.push_str(&format!("Ticks/run:   avg {:.1}\n", self.avg_ticks));
        out.push_str("Distribution:\n");
        for (score, count) in &self.score_distribution {
            out.push_str(&format!("  {:>4}: {}\n", score, count));
        }
        out
    }

    /// One line for `--quiet`.
    pub fn summary_line(&self) -> String {
        format!(
            "runs={} avg_score={:.2} max_score={} timed_out={}",
            self.num_runs, self.avg_score, self.max_score, self.runs_timed_out
        )
    }
}
