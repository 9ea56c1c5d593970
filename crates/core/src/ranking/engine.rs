//! Leaderboard ranking
//!
//! Scores are the plain mean of each performer's target achievement in the
//! period. This is deliberately not the time-weighted summary figure.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use workpace_domain::{ActivityEntry, Leaderboard, Period, RankingEntry, Viewer};

use crate::utils::{mean, round2};

/// Performers ranked by mean target achievement within `period`.
///
/// Highest score first; equal scores are ordered by performer name.
pub fn rank(entries: &[ActivityEntry], period: &Period) -> Vec<RankingEntry> {
    let mut by_performer: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for entry in entries.iter().filter(|entry| period.contains(entry.date())) {
        by_performer
            .entry(entry.performer_name())
            .or_default()
            .push(entry.target_achieved_percent());
    }

    let mut rankings: Vec<RankingEntry> = by_performer
        .into_iter()
        .map(|(performer_name, scores)| RankingEntry {
            performer_name: performer_name.to_string(),
            average_achievement_percent: round2(mean(&scores)),
        })
        .collect();

    rankings.sort_by(|a, b| {
        b.average_achievement_percent
            .partial_cmp(&a.average_achievement_percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.performer_name.cmp(&b.performer_name))
    });
    rankings
}

/// Rankings plus the viewer's own position.
///
/// The viewer is matched by performer name. Rank is one more than the
/// number of performers with a strictly greater score, so tied performers
/// share a rank.
pub fn leaderboard(entries: &[ActivityEntry], viewer: &Viewer, period: &Period) -> Leaderboard {
    let rankings = rank(entries, period);

    let viewer_score = rankings
        .iter()
        .find(|ranking| ranking.performer_name == viewer.performer_name)
        .map(|ranking| ranking.average_achievement_percent);

    let viewer_rank = viewer_score.map(|score| {
        1 + rankings.iter().filter(|ranking| ranking.average_achievement_percent > score).count()
    });

    Leaderboard { rankings, viewer_rank, viewer_score }
}
