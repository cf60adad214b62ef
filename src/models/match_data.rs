use serde::{Deserialize, Serialize};

/// One side's scoreline. Overs carry the cricket display convention:
/// `4.3` is 4 completed overs and 3 balls, so the fractional digit
/// stays in 0..=5 and rolls into the next over at 6.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
    pub wickets: u8,
    pub overs: f64,
}

/// A persisted match. `id` is assigned on insert and never changes.
/// Field names on the wire are camelCase to match the scoreboard client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MatchRecord {
    pub id: String,
    pub team_a: TeamScore,
    pub team_b: TeamScore,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler: Option<String>,
}

impl MatchRecord {
    pub fn from_payload(id: String, payload: MatchPayload) -> Self {
        Self {
            id,
            team_a: payload.team_a,
            team_b: payload.team_b,
            status: payload.status,
            striker: payload.striker,
            non_striker: payload.non_striker,
            bowler: payload.bowler,
        }
    }

    pub fn into_payload(self) -> MatchPayload {
        MatchPayload {
            team_a: self.team_a,
            team_b: self.team_b,
            status: self.status,
            striker: self.striker,
            non_striker: self.non_striker,
            bowler: self.bowler,
        }
    }
}

/// A match without its id. Insert assigns a fresh id, replace keeps
/// the existing one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPayload {
    pub team_a: TeamScore,
    pub team_b: TeamScore,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler: Option<String>,
}

/// Which side a live update targets. The roles are fixed, not a set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    Score,
    Wickets,
    Overs,
}

/// Body of a live scoreboard update. `delta` is signed; negative deltas
/// are the correction mechanism ("-1 Run", "-1 Wicket").
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LiveUpdateRequest {
    pub team: TeamSide,
    pub field: ScoreField,
    pub delta: f64,
    /// Regenerate the status line from the narrator after applying the delta.
    #[serde(default)]
    pub narrate: bool,
}

/// Raw admin form submission. Numeric fields arrive as text and are coerced
/// during validation; an empty string means "missing", never zero.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchForm {
    pub team_a_name: String,
    pub team_a_score: String,
    pub team_a_wickets: String,
    pub team_a_overs: String,
    pub team_b_name: String,
    pub team_b_score: String,
    pub team_b_wickets: String,
    pub team_b_overs: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub striker: Option<String>,
    #[serde(default)]
    pub non_striker: Option<String>,
    #[serde(default)]
    pub bowler: Option<String>,
}
