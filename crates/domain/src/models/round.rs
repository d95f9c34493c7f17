//! Competition round entity.
//!
//! Unlike [`Invitation`](super::Invitation), a round has no transition
//! commands: its status is advanced by the scheduling and scoring workflows
//! on the backend and arrives here through [`Round::from_persistence`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::allowance_percentage::AllowancePercentage;
use super::handicap_mode::HandicapMode;
use super::match_format::MatchFormat;
use super::round_status::RoundStatus;
use super::session_type::SessionType;
use super::status::StatusLifecycle;
use crate::error::DomainError;

/// Reference to a match scheduled within a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRef {
    pub id: String,
    pub match_number: u32,
}

/// Input for creating a new round.
#[derive(Debug, Clone)]
pub struct NewRound {
    pub id: String,
    pub competition_id: String,
    pub golf_course_id: String,
    pub round_date: NaiveDate,
    pub session_type: SessionType,
    pub match_format: MatchFormat,
    pub handicap_mode: Option<HandicapMode>,
    pub allowance_percentage: AllowancePercentage,
}

/// Flat wire representation of a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundRecord {
    pub id: String,
    pub competition_id: String,
    pub golf_course_id: String,
    pub round_date: NaiveDate,
    pub session_type: String,
    pub match_format: String,
    pub handicap_mode: Option<String>,
    pub allowance_percentage: Option<i32>,
    pub effective_allowance: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub matches: Vec<MatchRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A session of matches played on one course on one day.
#[derive(Debug, Clone)]
pub struct Round {
    id: String,
    competition_id: String,
    golf_course_id: String,
    round_date: NaiveDate,
    session_type: SessionType,
    match_format: MatchFormat,
    handicap_mode: Option<HandicapMode>,
    allowance_percentage: AllowancePercentage,
    effective_allowance: Option<f64>,
    status: RoundStatus,
    matches: Vec<MatchRef>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Round {
    /// Creates a round awaiting team selection.
    pub fn create(input: NewRound) -> Result<Self, DomainError> {
        Self::create_at(input, Utc::now())
    }

    pub fn create_at(input: NewRound, now: DateTime<Utc>) -> Result<Self, DomainError> {
        require_present("id", &input.id)?;
        require_present("competitionId", &input.competition_id)?;
        require_present("golfCourseId", &input.golf_course_id)?;

        Ok(Self {
            id: input.id,
            competition_id: input.competition_id,
            golf_course_id: input.golf_course_id,
            round_date: input.round_date,
            session_type: input.session_type,
            match_format: input.match_format,
            handicap_mode: input.handicap_mode,
            allowance_percentage: input.allowance_percentage,
            effective_allowance: None,
            status: RoundStatus::default(),
            matches: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds a round from a backend record.
    pub fn from_persistence(record: RoundRecord) -> Result<Self, DomainError> {
        require_present("id", &record.id)?;
        require_present("competitionId", &record.competition_id)?;
        require_present("golfCourseId", &record.golf_course_id)?;

        let handicap_mode = record
            .handicap_mode
            .as_deref()
            .map(str::parse::<HandicapMode>)
            .transpose()?;

        Ok(Self {
            session_type: record.session_type.parse()?,
            match_format: record.match_format.parse()?,
            handicap_mode,
            allowance_percentage: AllowancePercentage::new(record.allowance_percentage)?,
            status: record.status.parse()?,
            id: record.id,
            competition_id: record.competition_id,
            golf_course_id: record.golf_course_id,
            round_date: record.round_date,
            effective_allowance: record.effective_allowance,
            matches: record.matches,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }

    pub fn to_persistence(&self) -> RoundRecord {
        RoundRecord {
            id: self.id.clone(),
            competition_id: self.competition_id.clone(),
            golf_course_id: self.golf_course_id.clone(),
            round_date: self.round_date,
            session_type: self.session_type.as_str().to_string(),
            match_format: self.match_format.as_str().to_string(),
            handicap_mode: self.handicap_mode.map(|m| m.as_str().to_string()),
            allowance_percentage: self.allowance_percentage.value().map(i32::from),
            effective_allowance: self.effective_allowance,
            status: self.status.as_str().to_string(),
            matches: self.matches.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Returns a copy of this round with the given matches attached.
    pub fn with_matches(&self, matches: Vec<MatchRef>) -> Self {
        Self {
            matches,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    pub fn is_editable(&self) -> bool {
        self.status.is_editable()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn players_per_team(&self) -> u8 {
        self.match_format.players_per_team()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn competition_id(&self) -> &str {
        &self.competition_id
    }

    pub fn golf_course_id(&self) -> &str {
        &self.golf_course_id
    }

    pub fn round_date(&self) -> NaiveDate {
        self.round_date
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    pub fn match_format(&self) -> MatchFormat {
        self.match_format
    }

    pub fn handicap_mode(&self) -> Option<HandicapMode> {
        self.handicap_mode
    }

    pub fn allowance_percentage(&self) -> AllowancePercentage {
        self.allowance_percentage
    }

    pub fn effective_allowance(&self) -> Option<f64> {
        self.effective_allowance
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Matches in schedule order. Borrowed, so callers cannot change the round.
    pub fn matches(&self) -> &[MatchRef] {
        &self.matches
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl PartialEq for Round {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Round {}

impl Hash for Round {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl TryFrom<RoundRecord> for Round {
    type Error = DomainError;

    fn try_from(record: RoundRecord) -> Result<Self, Self::Error> {
        Self::from_persistence(record)
    }
}

fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    shared::validation::validate_not_blank(value)
        .map_err(|_| DomainError::invalid_value("round", field, "Must not be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, 8, 30, 0).unwrap()
    }

    fn new_round() -> NewRound {
        NewRound {
            id: "round-1".to_string(),
            competition_id: "comp-1".to_string(),
            golf_course_id: "course-7".to_string(),
            round_date: NaiveDate::from_ymd_opt(2026, 10, 3).unwrap(),
            session_type: SessionType::Morning,
            match_format: MatchFormat::Fourball,
            handicap_mode: Some(HandicapMode::MatchPlay),
            allowance_percentage: AllowancePercentage::new(Some(90)).unwrap(),
        }
    }

    fn record() -> RoundRecord {
        RoundRecord {
            id: "round-9".to_string(),
            competition_id: "comp-1".to_string(),
            golf_course_id: "course-7".to_string(),
            round_date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
            session_type: "AFTERNOON".to_string(),
            match_format: "SINGLES".to_string(),
            handicap_mode: None,
            allowance_percentage: None,
            effective_allowance: Some(100.0),
            status: "SCHEDULED".to_string(),
            matches: vec![
                MatchRef {
                    id: "match-1".to_string(),
                    match_number: 1,
                },
                MatchRef {
                    id: "match-2".to_string(),
                    match_number: 2,
                },
            ],
            created_at: created(),
            updated_at: created(),
        }
    }

    #[test]
    fn test_create_defaults_to_pending_teams() {
        let round = Round::create_at(new_round(), created()).unwrap();
        assert_eq!(round.status(), RoundStatus::PendingTeams);
        assert!(round.is_editable());
        assert!(round.matches().is_empty());
        assert_eq!(round.effective_allowance(), None);
        assert_eq!(round.players_per_team(), 2);
    }

    #[test]
    fn test_create_rejects_blank_course() {
        let input = NewRound {
            golf_course_id: String::new(),
            ..new_round()
        };
        let err = Round::create(input).unwrap_err();
        assert_eq!(err.to_string(), "Invalid round: golfCourseId. Must not be empty");
    }

    #[test]
    fn test_from_persistence() {
        let round = Round::from_persistence(record()).unwrap();
        assert_eq!(round.status(), RoundStatus::Scheduled);
        assert!(!round.is_editable());
        assert_eq!(round.session_type(), SessionType::Afternoon);
        assert_eq!(round.match_format(), MatchFormat::Singles);
        assert_eq!(round.players_per_team(), 1);
        assert!(round.allowance_percentage().is_whs_default());
        assert_eq!(round.handicap_mode(), None);
        assert_eq!(round.matches().len(), 2);
        assert_eq!(round.matches()[1].match_number, 2);
    }

    #[test]
    fn test_from_persistence_rejects_invalid_values() {
        let bad_status = RoundRecord {
            status: "CANCELLED".to_string(),
            ..record()
        };
        assert!(Round::from_persistence(bad_status).is_err());

        let bad_format = RoundRecord {
            match_format: "SCRAMBLE".to_string(),
            ..record()
        };
        assert!(Round::from_persistence(bad_format).is_err());

        let bad_allowance = RoundRecord {
            allowance_percentage: Some(57),
            ..record()
        };
        let err = Round::from_persistence(bad_allowance).unwrap_err();
        assert!(err.to_string().contains("increments of 5"));

        let bad_mode = RoundRecord {
            handicap_mode: Some("STROKE_PLAY".to_string()),
            ..record()
        };
        assert!(Round::from_persistence(bad_mode).is_err());
    }

    #[test]
    fn test_persistence_round_trip() {
        let original = Round::create_at(new_round(), created()).unwrap();
        let record = original.to_persistence();
        assert_eq!(record.status, "PENDING_TEAMS");
        assert_eq!(record.allowance_percentage, Some(90));
        assert_eq!(record.handicap_mode.as_deref(), Some("MATCH_PLAY"));

        let hydrated = Round::from_persistence(record.clone()).unwrap();
        assert_eq!(hydrated, original);
        assert_eq!(hydrated.to_persistence(), record);
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["roundDate"], "2026-10-04");
        assert_eq!(json["golfCourseId"], "course-7");
        assert_eq!(json["matches"][0]["matchNumber"], 1);
        assert_eq!(json["allowancePercentage"], serde_json::Value::Null);

        let parsed: RoundRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn test_matches_default_to_empty_when_missing() {
        let mut json = serde_json::to_value(record()).unwrap();
        json.as_object_mut().unwrap().remove("matches");
        let parsed: RoundRecord = serde_json::from_value(json).unwrap();
        assert!(parsed.matches.is_empty());
    }

    #[test]
    fn test_with_matches_leaves_original_untouched() {
        let round = Round::create_at(new_round(), created()).unwrap();
        let scheduled = round.with_matches(vec![MatchRef {
            id: "match-1".to_string(),
            match_number: 1,
        }]);

        assert!(round.matches().is_empty());
        assert_eq!(scheduled.matches().len(), 1);
        assert!(scheduled.updated_at() >= round.updated_at());
        assert_eq!(scheduled, round);
    }

    #[test]
    fn test_completed_round_is_terminal() {
        let done = Round::from_persistence(RoundRecord {
            status: "COMPLETED".to_string(),
            ..record()
        })
        .unwrap();
        assert!(done.is_completed());
        assert!(done.is_terminal());
        assert!(!done.is_editable());
    }
}
