use serde::Serialize;

/// Minimum total score (70% of 250) for advancement gating.
pub const PASSING_SCORE: i32 = 175;

/// Highest total the rubric can produce.
pub const MAX_SCORE: i32 = 250;

/// One row of the rank/rate table. Intervals are closed on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankBand {
    pub name: &'static str,
    pub min_score: i32,
    pub max_score: i32,
    pub rate_per_hour: u32,
}

/// Ordered partition of 0..=250 into academic ranks. Contiguous by
/// construction; `partition_is_contiguous` in the tests guards the invariant.
pub const RANK_BANDS: [RankBand; 16] = [
    RankBand {
        name: "Lecturer I",
        min_score: 0,
        max_score: 64,
        rate_per_hour: 100,
    },
    RankBand {
        name: "Lecturer II",
        min_score: 65,
        max_score: 79,
        rate_per_hour: 110,
    },
    RankBand {
        name: "Lecturer III",
        min_score: 80,
        max_score: 94,
        rate_per_hour: 120,
    },
    RankBand {
        name: "Instructor I",
        min_score: 95,
        max_score: 109,
        rate_per_hour: 135,
    },
    RankBand {
        name: "Instructor II",
        min_score: 110,
        max_score: 124,
        rate_per_hour: 150,
    },
    RankBand {
        name: "Instructor III",
        min_score: 125,
        max_score: 139,
        rate_per_hour: 165,
    },
    RankBand {
        name: "Assistant Professor I",
        min_score: 140,
        max_score: 154,
        rate_per_hour: 185,
    },
    RankBand {
        name: "Assistant Professor II",
        min_score: 155,
        max_score: 164,
        rate_per_hour: 200,
    },
    RankBand {
        name: "Assistant Professor III",
        min_score: 165,
        max_score: 174,
        rate_per_hour: 215,
    },
    RankBand {
        name: "Associate Professor I",
        min_score: 175,
        max_score: 184,
        rate_per_hour: 235,
    },
    RankBand {
        name: "Associate Professor II",
        min_score: 185,
        max_score: 194,
        rate_per_hour: 255,
    },
    RankBand {
        name: "Associate Professor III",
        min_score: 195,
        max_score: 204,
        rate_per_hour: 275,
    },
    RankBand {
        name: "Associate Professor IV",
        min_score: 205,
        max_score: 209,
        rate_per_hour: 300,
    },
    RankBand {
        name: "Professor I",
        min_score: 210,
        max_score: 224,
        rate_per_hour: 350,
    },
    RankBand {
        name: "Professor II",
        min_score: 225,
        max_score: 239,
        rate_per_hour: 375,
    },
    RankBand {
        name: "Professor III",
        min_score: 240,
        max_score: 250,
        rate_per_hour: 400,
    },
];

/// Resolve the band containing `total`. Scores outside 0..=250 (malformed
/// input) fail open to the lowest band rather than erroring.
pub fn rank_of(total: i32) -> &'static RankBand {
    RANK_BANDS
        .iter()
        .find(|band| band.min_score <= total && total <= band.max_score)
        .unwrap_or(&RANK_BANDS[0])
}

pub fn is_passing(total: i32) -> bool {
    total >= PASSING_SCORE
}
