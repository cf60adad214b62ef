use crate::models::match_data::{MatchRecord, ScoreField, TeamSide};

/// A team's innings ends at 10 wickets.
pub const MAX_WICKETS: u8 = 10;

/// Apply a signed live-scoreboard delta to one field of one team and return
/// the updated record. Pure: the id, the status line and the other team are
/// never touched. Out-of-range results are clamped silently; rejecting bad
/// input is the job of form validation, not of live updates.
pub fn apply_live_update(
    record: &MatchRecord,
    team: TeamSide,
    field: ScoreField,
    delta: f64,
) -> MatchRecord {
    let mut updated = record.clone();
    let target = match team {
        TeamSide::TeamA => &mut updated.team_a,
        TeamSide::TeamB => &mut updated.team_b,
    };

    match field {
        ScoreField::Score => {
            let next = target.score as i64 + delta.round() as i64;
            target.score = next.max(0) as u32;
        }
        ScoreField::Wickets => {
            let next = target.wickets as i64 + delta.round() as i64;
            target.wickets = next.clamp(0, MAX_WICKETS as i64) as u8;
        }
        ScoreField::Overs => {
            target.overs = bump_overs(target.overs, delta);
        }
    }

    updated
}

/// Overs display base-10 but advance base-6: `4.5` plus one ball is `5.0`,
/// never `4.6`. The balls digit is recovered with a round so float drift from
/// earlier decimal arithmetic cannot push it off by one.
pub fn bump_overs(current: f64, delta: f64) -> f64 {
    let completed = current.floor();
    let balls = ((current - completed) * 10.0).round();

    if delta > 0.0 {
        if balls + 1.0 > 5.0 {
            // Over complete, balls reset to zero.
            completed + 1.0
        } else {
            round_one_decimal(completed + (balls + 1.0) / 10.0)
        }
    } else if delta < 0.0 {
        if balls - 1.0 < 0.0 {
            // Borrowing from the previous over lands on .5, an approximation
            // inherited from the original scorer. See DESIGN.md.
            (completed - 1.0 + 0.5).max(0.0)
        } else {
            round_one_decimal(current + delta).max(0.0)
        }
    } else {
        current
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::match_data::TeamScore;

    fn record() -> MatchRecord {
        MatchRecord {
            id: "m-1".to_string(),
            team_a: TeamScore {
                name: "IND".to_string(),
                score: 185,
                wickets: 5,
                overs: 19.2,
            },
            team_b: TeamScore {
                name: "AUS".to_string(),
                score: 120,
                wickets: 8,
                overs: 17.0,
            },
            status: "IND needs 15 runs in 4 balls to win.".to_string(),
            striker: None,
            non_striker: None,
            bowler: None,
        }
    }

    #[test]
    fn one_ball_past_five_completes_the_over() {
        assert_eq!(bump_overs(4.5, 0.1), 5.0);
    }

    #[test]
    fn six_balls_complete_one_full_over() {
        let mut overs = 12.0;
        for _ in 0..6 {
            overs = bump_overs(overs, 0.1);
        }
        assert_eq!(overs, 13.0);
    }

    #[test]
    fn ball_increment_advances_the_balls_digit() {
        assert_eq!(bump_overs(4.0, 0.1), 4.1);
        assert_eq!(bump_overs(4.3, 0.1), 4.4);
    }

    #[test]
    fn balls_digit_survives_float_drift() {
        // 4.2 stored through repeated decimal arithmetic is not exact.
        let drifted = 4.0 + 0.1 + 0.1 - 0.000000001;
        assert_eq!(bump_overs(drifted, 0.1), 4.3);
    }

    #[test]
    fn ball_decrement_borrows_half_an_over() {
        assert_eq!(bump_overs(5.0, -0.1), 4.5);
    }

    #[test]
    fn ball_decrement_inside_an_over_subtracts_directly() {
        assert_eq!(bump_overs(4.3, -0.1), 4.2);
    }

    #[test]
    fn overs_never_go_below_zero() {
        assert_eq!(bump_overs(0.0, -0.1), 0.0);
    }

    #[test]
    fn zero_delta_leaves_overs_unchanged() {
        assert_eq!(bump_overs(7.4, 0.0), 7.4);
    }

    #[test]
    fn score_delta_adds_runs() {
        let updated = apply_live_update(&record(), TeamSide::TeamA, ScoreField::Score, 6.0);
        assert_eq!(updated.team_a.score, 191);
        assert_eq!(updated.team_a.wickets, 5);
        assert_eq!(updated.team_a.overs, 19.2);
    }

    #[test]
    fn score_clamps_at_zero() {
        let mut start = record();
        start.team_a.score = 0;
        let updated = apply_live_update(&start, TeamSide::TeamA, ScoreField::Score, -1.0);
        assert_eq!(updated.team_a.score, 0);
    }

    #[test]
    fn plus_one_then_minus_one_run_round_trips() {
        let start = record();
        let up = apply_live_update(&start, TeamSide::TeamB, ScoreField::Score, 1.0);
        let back = apply_live_update(&up, TeamSide::TeamB, ScoreField::Score, -1.0);
        assert_eq!(back.team_b.score, start.team_b.score);
    }

    #[test]
    fn wickets_clamp_at_ten() {
        let mut start = record();
        start.team_a.wickets = 10;
        let updated = apply_live_update(&start, TeamSide::TeamA, ScoreField::Wickets, 1.0);
        assert_eq!(updated.team_a.wickets, 10);
    }

    #[test]
    fn wickets_clamp_at_zero() {
        let mut start = record();
        start.team_b.wickets = 0;
        let updated = apply_live_update(&start, TeamSide::TeamB, ScoreField::Wickets, -1.0);
        assert_eq!(updated.team_b.wickets, 0);
    }

    #[test]
    fn untargeted_team_id_and_status_are_untouched() {
        let start = record();
        let updated = apply_live_update(&start, TeamSide::TeamA, ScoreField::Score, 4.0);
        assert_eq!(updated.id, start.id);
        assert_eq!(updated.status, start.status);
        assert_eq!(updated.team_b, start.team_b);
    }
}
