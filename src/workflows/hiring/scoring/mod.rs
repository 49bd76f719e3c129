//! Evaluation scoring: sums caller-supplied sub-scores and maps the total to
//! an academic rank and hourly rate through the static band table. Stateless,
//! no I/O; malformed totals fall back to the lowest band instead of failing.

mod bands;

pub use bands::{is_passing, rank_of, RankBand, MAX_SCORE, PASSING_SCORE, RANK_BANDS};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pre-aggregated sub-scores per rubric category. Each is a subtotal the
/// caller computed from its detailed breakdown; this engine only sums and
/// ranks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub educational: i32,
    pub experience: i32,
    pub professional_development: i32,
    pub technological: i32,
}

impl SubScores {
    pub fn total(&self) -> i32 {
        self.educational + self.experience + self.professional_development + self.technological
    }
}

/// Free-form key/points detail backing one category subtotal.
pub type CategoryBreakdown = BTreeMap<String, i32>;

/// Open nested breakdown persisted alongside the sub-scores. Carried opaquely;
/// the engine never recomputes subtotals from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub educational: CategoryBreakdown,
    #[serde(default)]
    pub experience: CategoryBreakdown,
    #[serde(default)]
    pub professional_development: CategoryBreakdown,
    #[serde(default)]
    pub technological: CategoryBreakdown,
}

/// Output of [`score`]: the summed total and its rank/rate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub total_score: i32,
    pub rank: &'static str,
    pub rate_per_hour: u32,
    pub passing: bool,
}

/// Score a set of sub-scores. Pure; the only edge behavior is the band
/// table's fail-open fallback for totals outside 0..=250.
pub fn score(sub_scores: &SubScores) -> ScoreSummary {
    let total_score = sub_scores.total();
    let band = rank_of(total_score);

    ScoreSummary {
        total_score,
        rank: band.name,
        rate_per_hour: band.rate_per_hour,
        passing: is_passing(total_score),
    }
}

/// Finalized scoring record for one applicant. `total_score` is fixed at
/// creation as the sum of the sub-scores and is never edited independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub scores: SubScores,
    pub breakdown: ScoreBreakdown,
    pub total_score: i32,
    pub rank: String,
    pub rate_per_hour: u32,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn new(scores: SubScores, breakdown: ScoreBreakdown, now: DateTime<Utc>) -> Self {
        let summary = score(&scores);
        Self {
            scores,
            breakdown,
            total_score: summary.total_score,
            rank: summary.rank.to_string(),
            rate_per_hour: summary.rate_per_hour,
            evaluated_at: now,
        }
    }

    pub fn is_passing(&self) -> bool {
        is_passing(self.total_score)
    }
}
