//! Property-based and scenario tests for the metrics engine
//!
//! Covers the formula identities, weighting behaviour, scope isolation and
//! the CSV export contract with proptest, plus the fixed scenarios the
//! engine must always reproduce.

mod support;

use proptest::prelude::*;
use support::fixtures::{date, performer, raw_entry};
use workpace_core::scope::visible_entries;
use workpace_core::MetricsEngine;
use workpace_domain::{
    AchievementStatus, ActivityEntry, Leaderboard, Period, Role, StandardsCatalog, Summary, Viewer,
    WorkpaceError,
};

const TASK_TYPES: [&str; 8] = [
    "Prestyle",
    "Preedit",
    "FL Validation",
    "Revises Validation",
    "Normalisation",
    "Cast-off XML Conversion",
    "Ref Edit",
    "Style Editing",
];

fn build(
    engine: &MetricsEngine,
    owner: &Viewer,
    task_type: &str,
    completed: f64,
    estimated: f64,
    taken: f64,
) -> ActivityEntry {
    engine
        .build_entry(
            &raw_entry(&owner.performer_name, task_type, completed, estimated, taken, "2024-03-05"),
            owner,
        )
        .expect("generated entry should validate")
}

/// Minimal RFC 4180 reader for one line: quoted fields with doubled quotes.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut chars = line.chars().peekable();
    let mut quoted = false;

    while let Some(c) = chars.next() {
        match (quoted, c) {
            (true, '"') if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            (true, '"') => quoted = false,
            (false, '"') if field.is_empty() => quoted = true,
            (false, ',') => fields.push(std::mem::take(&mut field)),
            (_, c) => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn number(field: &str) -> f64 {
    field.parse().expect("numeric csv field")
}

fn task_type() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TASK_TYPES.to_vec())
}

// ============================================================================
// Formula identities
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_time_percent_matches_formula(
        estimated in 0.1f64..24.0,
        taken in 0.1f64..24.0,
    ) {
        let engine = MetricsEngine::default();
        let asha = performer("u1", "acme", "Asha");
        let entry = build(&engine, &asha, "Prestyle", 10.0, estimated, taken);

        let exact = estimated / taken * 100.0;
        prop_assert!((entry.time_achieved_percent() - exact).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn prop_target_percent_matches_formula(
        task in task_type(),
        completed in 1.0f64..5000.0,
        taken in 0.1f64..12.0,
    ) {
        let engine = MetricsEngine::default();
        let standard = StandardsCatalog::default().target_for(task);
        let entry = build(&engine, &performer("u1", "acme", "Asha"), task, completed, 1.0, taken);

        let exact = completed / ((standard / 8.0) * taken) * 100.0;
        prop_assert!((entry.target_achieved_percent() - exact).abs() <= 0.005 + 1e-6);
        prop_assert_eq!(
            entry.status(),
            AchievementStatus::from_percent(entry.target_achieved_percent())
        );
        prop_assert_eq!(entry.status().is_achieved(), entry.target_achieved_percent() >= 100.0);
    }

    #[test]
    fn prop_calculation_is_idempotent(
        task in task_type(),
        completed in 1.0f64..5000.0,
        estimated in 0.1f64..12.0,
        taken in 0.1f64..12.0,
    ) {
        let engine = MetricsEngine::default();
        let asha = performer("u1", "acme", "Asha");
        let first = build(&engine, &asha, task, completed, estimated, taken);
        let second = build(&engine, &asha, task, completed, estimated, taken);
        prop_assert_eq!(first.metrics(), second.metrics());
    }
}

// ============================================================================
// Weighting
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// With equal durations the time weighting collapses to a plain mean.
    #[test]
    fn prop_equal_durations_weight_like_a_mean(
        outputs in prop::collection::vec(1.0f64..2000.0, 1..12),
        taken in 0.5f64..8.0,
    ) {
        let engine = MetricsEngine::default();
        let asha = performer("u1", "acme", "Asha");
        let entries: Vec<ActivityEntry> = outputs
            .iter()
            .map(|&completed| build(&engine, &asha, "Prestyle", completed, taken, taken))
            .collect();

        let summary = engine.cumulative_summary(&entries);
        let plain_mean = entries.iter().map(ActivityEntry::target_achieved_percent).sum::<f64>()
            / entries.len() as f64;
        prop_assert!((summary.weighted_achievement_percent - plain_mean).abs() <= 0.011);
        prop_assert_eq!(summary.is_achieved, summary.weighted_achievement_percent >= 100.0);
    }
}

#[test]
fn test_weighting_diverges_from_plain_mean_when_durations_differ() {
    let engine = MetricsEngine::default();
    let asha = performer("u1", "acme", "Asha");
    // 1h at 200% and 7h at 50%.
    let entries = vec![
        build(&engine, &asha, "Prestyle", 225.0, 1.0, 1.0),
        build(&engine, &asha, "Prestyle", 393.75, 7.0, 7.0),
    ];
    assert_eq!(entries[0].target_achieved_percent(), 200.0);
    assert_eq!(entries[1].target_achieved_percent(), 50.0);

    let summary = engine.cumulative_summary(&entries);
    assert_eq!(summary.weighted_achievement_percent, 68.75);

    let board = engine.leaderboard(&entries, &asha, &Period::All);
    assert_eq!(board.rankings[0].average_achievement_percent, 125.0);
}

// ============================================================================
// Scope isolation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_performer_only_sees_own_entries(
        owners in prop::collection::vec(0usize..4, 0..20),
        viewer_index in 0usize..4,
    ) {
        let engine = MetricsEngine::default();
        let people: Vec<Viewer> = (0..4)
            .map(|i| {
                let scope = if i % 2 == 0 { "acme" } else { "globex" };
                performer(&format!("u{i}"), scope, &format!("P{i}"))
            })
            .collect();

        let entries: Vec<ActivityEntry> = owners
            .iter()
            .map(|&i| build(&engine, &people[i], "Prestyle", 450.0, 4.0, 4.0))
            .collect();

        let viewer = &people[viewer_index];
        let visible = visible_entries(&entries, viewer);
        prop_assert!(visible.iter().all(|e| e.owner_id() == viewer.id));
        prop_assert_eq!(visible.len(), owners.iter().filter(|&&i| i == viewer_index).count());

        let lead = Viewer::new("lead", viewer.scope_id.clone(), Role::Lead, "Lead");
        prop_assert!(visible_entries(&entries, &lead).iter().all(|e| e.scope_id() == viewer.scope_id));
    }
}

// ============================================================================
// CSV export
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_csv_round_trips_entry_fields(
        rows in prop::collection::vec(
            (
                "[A-Za-z][A-Za-z ,\"]{0,20}",
                1.0f64..5000.0,
                0.1f64..12.0,
                0.1f64..12.0,
            ),
            1..6,
        ),
    ) {
        let engine = MetricsEngine::default();
        let asha = performer("u1", "acme", "Asha, \"Ace\"");
        let entries: Vec<ActivityEntry> = rows
            .iter()
            .map(|(title, completed, estimated, taken)| {
                let mut raw =
                    raw_entry("Asha, \"Ace\"", "Ref Edit", *completed, *estimated, *taken, "2024-03-05");
                raw.title_name = Some(title.clone());
                engine.build_entry(&raw, &asha).expect("valid")
            })
            .collect();

        let csv = engine.export_csv(&entries);
        prop_assert!(!csv.ends_with('\n'));

        let lines: Vec<&str> = csv.split('\n').collect();
        prop_assert_eq!(lines.len(), entries.len() + 2);

        for (line, entry) in lines[1..=entries.len()].iter().zip(&entries) {
            let fields = parse_csv_line(line);
            prop_assert_eq!(fields.len(), 11);
            prop_assert_eq!(&fields[1], entry.performer_name());
            prop_assert_eq!(&fields[2], entry.title_name());
            prop_assert_eq!(&fields[4], "400 references/day");
            prop_assert_eq!(number(&fields[5]), entry.completed_work());
            prop_assert_eq!(number(&fields[6]), entry.estimated_time());
            prop_assert_eq!(number(&fields[7]), entry.taken_time());
            prop_assert_eq!(number(&fields[8]), entry.time_achieved_percent());
            prop_assert_eq!(number(&fields[9]), entry.target_achieved_percent());
            prop_assert_eq!(&fields[10], entry.status().label());
        }

        let summary = engine.cumulative_summary(&entries);
        let cumulative = parse_csv_line(lines[lines.len() - 1]);
        prop_assert_eq!(cumulative.len(), 11);
        prop_assert_eq!(&cumulative[0], "Cumulative Total");
        prop_assert_eq!(number(&cumulative[5]), summary.total_work);
        prop_assert_eq!(number(&cumulative[7]), summary.total_time);
        prop_assert_eq!(number(&cumulative[9]), summary.weighted_achievement_percent);
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn test_prestyle_half_day_scenario() {
    let engine = MetricsEngine::default();
    let asha = performer("u1", "acme", "Asha");
    let entry = build(&engine, &asha, "Prestyle", 450.0, 4.0, 4.0);

    assert_eq!(entry.target_achieved_percent(), 100.0);
    assert_eq!(entry.status(), AchievementStatus::Achieved);
    assert_eq!(entry.status().label(), "Achieved");

    let csv = engine.export_csv(std::slice::from_ref(&entry));
    let row = csv.lines().nth(1).expect("entry row");
    assert_eq!(
        row,
        "2024-03-05,Asha,Asha's title,Prestyle,900 pages/day,450,4,4,100.00,100.00,Achieved"
    );
}

#[test]
fn test_empty_collection_scenario() {
    let engine = MetricsEngine::default();
    let asha = performer("u1", "acme", "Asha");

    let summary = engine.daily_summary(&[], date(2024, 3, 5));
    assert_eq!(
        summary,
        Summary {
            total_work: 0.0,
            total_time: 0.0,
            weighted_achievement_percent: 0.0,
            is_achieved: false,
        }
    );

    let board = engine.leaderboard(&[], &asha, &Period::current_month(date(2024, 3, 5)));
    assert_eq!(board, Leaderboard::default());
    assert_eq!(board.viewer_rank, None);
}

#[test]
fn test_unknown_task_type_never_reaches_calculator() {
    let engine = MetricsEngine::default();
    let asha = performer("u1", "acme", "Asha");
    let err = engine
        .build_entry(&raw_entry("Asha", "Typesetting", 10.0, 1.0, 1.0, "2024-03-05"), &asha)
        .expect_err("unknown task type");

    match err {
        WorkpaceError::MissingField(validation) => {
            assert_eq!(validation.fields(), vec!["task_type"]);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}
