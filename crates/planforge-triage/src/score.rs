//! Priority scoring for the triage board.
//!
//! The score is a unitless, additive integer used only for sort order.
//! Overdue items dominate; sets bounced back to the originator come next;
//! each blocking RFI adds proportional weight; prolonged inactivity is a
//! secondary escalator. Keeping the rules additive means no single factor
//! can mask the others, and each contributing reason stays individually
//! visible in the UI.

use chrono::NaiveDate;
use planforge_models::{DrawingSet, ReviewZone};

/// Days before the due date at which a set starts showing as "due soon".
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;

/// Inputs to the priority scorer, already derived from a drawing set.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput {
    /// Workflow zone the set currently occupies.
    pub zone: ReviewZone,
    /// Whether the set's review is past due.
    pub is_overdue: bool,
    /// Number of open RFIs referencing the set.
    pub linked_open_rfis: usize,
    /// Whole days since the last status movement.
    pub days_since_movement: i64,
}

/// One scoring rule: a named condition and the weight it contributes.
///
/// `hits` returns how many times the weight applies (0 or 1 for flag
/// rules, the RFI count for the per-RFI rule).
pub struct ScoreRule {
    /// Stable rule name, usable as an explanation key in the UI.
    pub name: &'static str,
    /// Weight added per hit.
    pub weight: u32,
    /// Number of times the weight applies for the given input.
    pub hits: fn(&ScoreInput) -> u32,
}

/// The scoring policy, as an explicit rule table.
pub const RULES: &[ScoreRule] = &[
    ScoreRule {
        name: "overdue",
        weight: 1000,
        hits: |input| u32::from(input.is_overdue && input.zone != ReviewZone::Released),
    },
    ScoreRule {
        name: "returned_to_court",
        weight: 500,
        hits: |input| u32::from(input.zone == ReviewZone::Returned),
    },
    ScoreRule {
        name: "open_rfi",
        weight: 300,
        hits: |input| input.linked_open_rfis as u32,
    },
    ScoreRule {
        name: "stagnant_over_14d",
        weight: 200,
        hits: |input| u32::from(input.days_since_movement > 14),
    },
    // Mutually exclusive with the 14-day rule.
    ScoreRule {
        name: "stagnant_over_7d",
        weight: 100,
        hits: |input| {
            u32::from(input.days_since_movement > 7 && input.days_since_movement <= 14)
        },
    },
];

/// Computes the composite urgency score for the given input.
pub fn priority_score(input: &ScoreInput) -> u32 {
    RULES
        .iter()
        .map(|rule| rule.weight * (rule.hits)(input))
        .sum()
}

/// True when the set has a due date strictly in the past and is not yet
/// released. Released sets never count as overdue; the closed status set
/// has no voided state, so nothing else suppresses the flag.
pub fn is_overdue(set: &DrawingSet, zone: ReviewZone, today: NaiveDate) -> bool {
    match set.due_date {
        Some(due) => zone != ReviewZone::Released && due < today,
        None => false,
    }
}

/// True when the set is not overdue but its due date falls within the
/// due-soon window of `today` (today itself included).
pub fn is_due_soon(set: &DrawingSet, today: NaiveDate, overdue: bool) -> bool {
    if overdue {
        return false;
    }
    match set.due_date {
        Some(due) => {
            let days_out = (due - today).num_days();
            (0..=DUE_SOON_WINDOW_DAYS).contains(&days_out)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planforge_models::DrawingSetBuilder;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(zone: ReviewZone) -> ScoreInput {
        ScoreInput {
            zone,
            is_overdue: false,
            linked_open_rfis: 0,
            days_since_movement: 0,
        }
    }

    fn rule(name: &str) -> &'static ScoreRule {
        RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_overdue_rule() {
        let r = rule("overdue");
        assert_eq!(r.weight, 1000);

        let mut i = input(ReviewZone::ExternalReview);
        i.is_overdue = true;
        assert_eq!((r.hits)(&i), 1);

        // Released sets never score as overdue.
        i.zone = ReviewZone::Released;
        assert_eq!((r.hits)(&i), 0);

        i.zone = ReviewZone::ExternalReview;
        i.is_overdue = false;
        assert_eq!((r.hits)(&i), 0);
    }

    #[test]
    fn test_returned_rule() {
        let r = rule("returned_to_court");
        assert_eq!(r.weight, 500);
        assert_eq!((r.hits)(&input(ReviewZone::Returned)), 1);
        assert_eq!((r.hits)(&input(ReviewZone::ActiveDetailing)), 0);
    }

    #[test]
    fn test_open_rfi_rule_scales_with_count() {
        let r = rule("open_rfi");
        assert_eq!(r.weight, 300);

        let mut i = input(ReviewZone::Intake);
        i.linked_open_rfis = 3;
        assert_eq!((r.hits)(&i), 3);
    }

    #[test]
    fn test_stagnation_rules_are_exclusive() {
        let over_14 = rule("stagnant_over_14d");
        let over_7 = rule("stagnant_over_7d");

        let mut i = input(ReviewZone::Intake);

        i.days_since_movement = 7;
        assert_eq!((over_7.hits)(&i), 0);
        assert_eq!((over_14.hits)(&i), 0);

        i.days_since_movement = 8;
        assert_eq!((over_7.hits)(&i), 1);
        assert_eq!((over_14.hits)(&i), 0);

        i.days_since_movement = 14;
        assert_eq!((over_7.hits)(&i), 1);
        assert_eq!((over_14.hits)(&i), 0);

        i.days_since_movement = 15;
        assert_eq!((over_7.hits)(&i), 0);
        assert_eq!((over_14.hits)(&i), 1);
    }

    #[test]
    fn test_composite_score_scenario() {
        // Overdue Returned set with 2 open RFIs, stagnant 20 days:
        // 1000 + 500 + 600 + 200 = 2300.
        let i = ScoreInput {
            zone: ReviewZone::Returned,
            is_overdue: true,
            linked_open_rfis: 2,
            days_since_movement: 20,
        };

        assert_eq!(priority_score(&i), 2300);
    }

    #[test]
    fn test_quiet_set_scores_zero() {
        assert_eq!(priority_score(&input(ReviewZone::ExternalReview)), 0);
    }

    #[test]
    fn test_is_overdue_boundaries() {
        let today = date(2026, 4, 10);

        let yesterday = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 9)).build();
        assert!(is_overdue(&yesterday, ReviewZone::ExternalReview, today));

        let due_today = DrawingSetBuilder::new("p1", "Set").due(today).build();
        assert!(!is_overdue(&due_today, ReviewZone::ExternalReview, today));

        let tomorrow = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 11)).build();
        assert!(!is_overdue(&tomorrow, ReviewZone::ExternalReview, today));
    }

    #[test]
    fn test_released_set_is_never_overdue() {
        let today = date(2026, 4, 10);
        let set = DrawingSetBuilder::new("p1", "Set").due(date(2026, 1, 1)).build();

        assert!(!is_overdue(&set, ReviewZone::Released, today));
    }

    #[test]
    fn test_no_due_date_is_not_overdue() {
        let set = DrawingSetBuilder::new("p1", "Set").build();
        assert!(!is_overdue(&set, ReviewZone::ExternalReview, date(2026, 4, 10)));
        assert!(!is_due_soon(&set, date(2026, 4, 10), false));
    }

    #[test]
    fn test_is_due_soon_window() {
        let today = date(2026, 4, 10);

        let in_window = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 12)).build();
        assert!(is_due_soon(&in_window, today, false));

        let edge = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 13)).build();
        assert!(is_due_soon(&edge, today, false));

        let beyond = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 14)).build();
        assert!(!is_due_soon(&beyond, today, false));

        let due_today = DrawingSetBuilder::new("p1", "Set").due(today).build();
        assert!(is_due_soon(&due_today, today, false));
    }

    #[test]
    fn test_overdue_suppresses_due_soon() {
        let today = date(2026, 4, 10);
        let set = DrawingSetBuilder::new("p1", "Set").due(date(2026, 4, 9)).build();

        assert!(!is_due_soon(&set, today, true));
    }
}
