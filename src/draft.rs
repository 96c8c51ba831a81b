//! Task Draft
//!
//! Uncommitted new-task form state and its conversion into a create request.

use chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

use crate::i18n::Lang;
use crate::models::{CreateTaskRequest, Id};

/// `<input type="datetime-local">` value formats (with and without seconds)
const LOCAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("invalid schedule time: {0}")]
    InvalidSchedule(String),
}

/// New-task form fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    /// Newline separated, one step per line
    pub steps_text: String,
    pub dog_id: Option<Id>,
    pub exercise_id: Option<Id>,
    /// Local wall-clock time, `YYYY-MM-DDTHH:MM`
    pub scheduled_local: String,
    pub language: Lang,
}

/// Single-field edit coming from the form
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    Title(String),
    Steps(String),
    Dog(Option<Id>),
    Exercise(Option<Id>),
    Scheduled(String),
}

impl TaskDraft {
    pub fn new(language: Lang) -> Self {
        Self { language, ..Self::default() }
    }

    pub fn edit(&mut self, field: DraftField) {
        match field {
            DraftField::Title(title) => self.title = title,
            DraftField::Steps(text) => self.steps_text = text,
            DraftField::Dog(id) => self.dog_id = id,
            DraftField::Exercise(id) => self.exercise_id = id,
            DraftField::Scheduled(value) => self.scheduled_local = value,
        }
    }

    /// Whether the save action should be enabled
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn steps(&self) -> Vec<String> {
        parse_steps(&self.steps_text)
    }

    /// Build the request body, resolving the local schedule time in `tz`.
    pub fn to_request<Tz: TimeZone>(&self, tz: &Tz) -> Result<CreateTaskRequest, DraftError> {
        if !self.can_save() {
            return Err(DraftError::EmptyTitle);
        }

        Ok(CreateTaskRequest {
            title: self.title.trim().to_string(),
            steps: self.steps(),
            dog_id: self.dog_id.clone(),
            exercise_id: self.exercise_id.clone(),
            scheduled_for: local_to_utc_iso(&self.scheduled_local, tz)?,
            language: self.language.code().to_string(),
        })
    }
}

/// Split step text on newlines, trimming each line and dropping empty ones.
pub fn parse_steps(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert a local datetime-input value into a UTC ISO-8601 timestamp.
/// Blank input means "not scheduled".
fn local_to_utc_iso<Tz: TimeZone>(value: &str, tz: &Tz) -> Result<Option<String>, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| DraftError::InvalidSchedule(value.to_string()))?;

    // Ambiguous times (DST fall-back) resolve to the earlier instant
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| DraftError::InvalidSchedule(value.to_string()))?;

    Ok(Some(local.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft { title: title.to_string(), ..TaskDraft::default() }
    }

    #[test]
    fn test_parse_steps_drops_blank_lines() {
        assert_eq!(parse_steps("Mark\n\nSit\n"), vec!["Mark", "Sit"]);
        assert_eq!(parse_steps("  Look \r\n\t\n Wait  "), vec!["Look", "Wait"]);
        assert!(parse_steps("\n  \n").is_empty());
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(!draft("").can_save());
        assert!(!draft("   \t").can_save());
        assert_eq!(draft("  ").to_request(&Utc), Err(DraftError::EmptyTitle));
        assert!(draft("Sit").can_save());
    }

    #[test]
    fn test_minimal_request_omits_optionals() {
        let request = draft(" Sit ").to_request(&Utc).unwrap();
        assert_eq!(request.title, "Sit");
        assert!(request.steps.is_empty());
        assert_eq!(request.dog_id, None);
        assert_eq!(request.exercise_id, None);
        assert_eq!(request.scheduled_for, None);
        assert_eq!(request.language, "en");
    }

    #[test]
    fn test_schedule_converted_to_utc() {
        let mut d = draft("Recall");
        d.language = Lang::He;
        d.edit(DraftField::Scheduled("2024-03-10T09:30".to_string()));
        d.edit(DraftField::Dog(Some(Id::new("4"))));

        let jerusalem = FixedOffset::east_opt(2 * 3600).unwrap();
        let request = d.to_request(&jerusalem).unwrap();
        assert_eq!(request.scheduled_for.as_deref(), Some("2024-03-10T07:30:00.000Z"));
        assert_eq!(request.dog_id, Some(Id::new("4")));
        assert_eq!(request.language, "he");
    }

    #[test]
    fn test_invalid_schedule_is_error() {
        let mut d = draft("Recall");
        d.edit(DraftField::Scheduled("tomorrow".to_string()));
        assert_eq!(
            d.to_request(&Utc),
            Err(DraftError::InvalidSchedule("tomorrow".to_string()))
        );
    }
}
