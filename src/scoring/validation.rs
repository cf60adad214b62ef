use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::match_data::{MatchForm, MatchPayload, MatchRecord, TeamScore};
use crate::scoring::live_update::MAX_WICKETS;

/// Catch-all slot for errors that belong to no single field.
pub const FORM_ERROR_KEY: &str = "_form";

/// Field-indexed validation messages, serialized verbatim to the client so
/// the form can redisplay them next to the offending inputs.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ValidationErrors {
    #[serde(flatten)]
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn push_form(&mut self, message: impl Into<String>) {
        self.push(FORM_ERROR_KEY, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&[String]> {
        self.errors.get(name).map(|messages| messages.as_slice())
    }
}

/// Per-call-site switches for the shared rule set. The original app declared
/// a near-identical schema at every entry point; this is the one copy.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    /// Minimum accepted team-name length after trimming.
    pub min_name_len: usize,
    /// When false a blank status is accepted and the caller must fill it
    /// (via the narrator) before persisting. Blank status is never stored.
    pub require_status: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            min_name_len: 1,
            require_status: true,
        }
    }
}

/// Validate a raw admin form submission into a `MatchPayload`, or report
/// every field error at once. Numeric text is coerced as a float; an empty
/// string is "missing", not zero. Wickets above 10 are rejected here - the
/// live engine clamps instead, and the two policies are deliberately
/// different.
pub fn validate_match_form(
    form: &MatchForm,
    options: &ValidationOptions,
) -> Result<MatchPayload, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let team_a = validate_team(
        "Team A",
        "teamA",
        &form.team_a_name,
        &form.team_a_score,
        &form.team_a_wickets,
        &form.team_a_overs,
        options,
        &mut errors,
    );
    let team_b = validate_team(
        "Team B",
        "teamB",
        &form.team_b_name,
        &form.team_b_score,
        &form.team_b_wickets,
        &form.team_b_overs,
        options,
        &mut errors,
    );

    if options.require_status && form.status.trim().is_empty() {
        errors.push("status", "Status is required");
    }

    match (team_a, team_b) {
        (Some(team_a), Some(team_b)) if errors.is_empty() => Ok(MatchPayload {
            team_a,
            team_b,
            status: form.status.clone(),
            striker: form.striker.clone(),
            non_striker: form.non_striker.clone(),
            bowler: form.bowler.clone(),
        }),
        _ => Err(errors),
    }
}

#[allow(clippy::too_many_arguments)]
fn validate_team(
    label: &str,
    key_prefix: &str,
    name: &str,
    score: &str,
    wickets: &str,
    overs: &str,
    options: &ValidationOptions,
    errors: &mut ValidationErrors,
) -> Option<TeamScore> {
    if name.trim().len() < options.min_name_len {
        errors.push(
            &format!("{}Name", key_prefix),
            format!("{} name is required", label),
        );
    }

    let score = parse_non_negative(score, &format!("{}Score", key_prefix), errors);
    let wickets = parse_wickets(wickets, &format!("{}Wickets", key_prefix), errors);
    let overs = parse_non_negative(overs, &format!("{}Overs", key_prefix), errors);

    match (score, wickets, overs) {
        (Some(score), Some(wickets), Some(overs)) if name.trim().len() >= options.min_name_len => {
            Some(TeamScore {
                name: name.to_string(),
                score: score as u32,
                wickets,
                overs,
            })
        }
        _ => None,
    }
}

fn parse_non_negative(raw: &str, field: &str, errors: &mut ValidationErrors) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "Must be a number");
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value >= 0.0 => Some(value),
        Ok(_) => {
            errors.push(field, "Must be a positive number");
            None
        }
        Err(_) => {
            errors.push(field, "Must be a number");
            None
        }
    }
}

fn parse_wickets(raw: &str, field: &str, errors: &mut ValidationErrors) -> Option<u8> {
    let value = parse_non_negative(raw, field, errors)?;
    if value > MAX_WICKETS as f64 {
        errors.push(field, "Wickets cannot exceed 10");
        return None;
    }
    Some(value as u8)
}

/// Parse and validate a bulk-import payload: a JSON array of complete match
/// records. Any structural or per-record failure rejects the payload in its
/// entirety - the caller must leave the store untouched on `Err`.
pub fn parse_import_payload(raw: &str) -> Result<Vec<MatchRecord>, ValidationErrors> {
    let records: Vec<MatchRecord> = serde_json::from_str(raw).map_err(|e| {
        let mut errors = ValidationErrors::default();
        errors.push_form(format!("Invalid match data payload: {}", e));
        errors
    })?;

    let mut errors = ValidationErrors::default();
    for (index, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            errors.push_form(format!("Record {}: id must not be empty", index + 1));
        }
        if record.status.trim().is_empty() {
            errors.push_form(format!("Record {}: status must not be empty", index + 1));
        }
        check_team(index, "teamA", &record.team_a, &mut errors);
        check_team(index, "teamB", &record.team_b, &mut errors);
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(errors)
    }
}

fn check_team(index: usize, key: &str, team: &TeamScore, errors: &mut ValidationErrors) {
    if team.name.trim().is_empty() {
        errors.push_form(format!("Record {}: {} name is required", index + 1, key));
    }
    if team.wickets > MAX_WICKETS {
        errors.push_form(format!("Record {}: {} wickets cannot exceed 10", index + 1, key));
    }
    if team.overs < 0.0 {
        errors.push_form(format!("Record {}: {} overs must not be negative", index + 1, key));
    }
}
