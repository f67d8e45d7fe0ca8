// Compliance module
// Regulatory deadlines shown on the compliance calendar

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::{require_text, ModelError};

string_enum! {
    /// Regulatory area a deadline belongs to
    pub enum ComplianceType as "compliance type" {
        Tax => "tax",
        Corporate => "corporate",
        Payroll => "payroll",
        License => "license",
    }
}

string_enum! {
    pub enum ComplianceStatus as "compliance status" {
        Pending => "pending",
        Completed => "completed",
        Upcoming => "upcoming",
        Overdue => "overdue",
    }
}

string_enum! {
    pub enum Priority as "priority" {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

/// A dated compliance obligation.
///
/// Only the calendar day of `date` is meaningful; two events fall on the same
/// day iff their year, month and day match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceEvent {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: ComplianceType,
    pub status: ComplianceStatus,
    pub priority: Priority,
}

impl ComplianceEvent {
    /// Create a pending, medium-priority tax event with the required fields
    ///
    /// # Examples
    /// ```
    /// use ai_auditor::models::compliance::ComplianceEvent;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let event = ComplianceEvent::new(1, "GST/HST Filing", date).unwrap();
    /// assert_eq!(event.date, date);
    /// ```
    pub fn new(id: u32, title: impl Into<String>, date: NaiveDate) -> Result<Self, ModelError> {
        let event = Self {
            id,
            title: title.into(),
            description: String::new(),
            date,
            kind: ComplianceType::Tax,
            status: ComplianceStatus::Pending,
            priority: Priority::Medium,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn builder() -> ComplianceEventBuilder {
        ComplianceEventBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("compliance event title", &self.title)
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn is_completed(&self) -> bool {
        self.status == ComplianceStatus::Completed
    }
}

/// Builder for compliance events with optional fields
#[derive(Default)]
pub struct ComplianceEventBuilder {
    id: Option<u32>,
    title: Option<String>,
    description: Option<String>,
    date: Option<NaiveDate>,
    kind: Option<ComplianceType>,
    status: Option<ComplianceStatus>,
    priority: Option<Priority>,
}

impl ComplianceEventBuilder {
    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn kind(mut self, kind: ComplianceType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn status(mut self, status: ComplianceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn build(self) -> Result<ComplianceEvent, ModelError> {
        let title = self.title.ok_or(ModelError::EmptyField("compliance event title"))?;
        let date = self.date.ok_or(ModelError::EmptyField("compliance event date"))?;

        let event = ComplianceEvent {
            id: self.id.unwrap_or_default(),
            title,
            description: self.description.unwrap_or_default(),
            date,
            kind: self.kind.unwrap_or(ComplianceType::Tax),
            status: self.status.unwrap_or(ComplianceStatus::Pending),
            priority: self.priority.unwrap_or(Priority::Medium),
        };

        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_new_event_defaults() {
        let event = ComplianceEvent::new(1, "GST/HST Filing", jan(15)).unwrap();
        assert_eq!(event.status, ComplianceStatus::Pending);
        assert_eq!(event.priority, Priority::Medium);
        assert!(event.is_on(jan(15)));
        assert!(!event.is_on(jan(16)));
    }

    #[test]
    fn test_new_event_blank_title() {
        let result = ComplianceEvent::new(1, "  ", jan(15));
        assert_eq!(result.unwrap_err(), ModelError::EmptyField("compliance event title"));
    }

    #[test]
    fn test_builder_sets_every_field() {
        let event = ComplianceEvent::builder()
            .id(4)
            .title("Business License Renewal")
            .description("Municipal business license renewal")
            .date(jan(25))
            .kind(ComplianceType::License)
            .status(ComplianceStatus::Overdue)
            .priority(Priority::Low)
            .build()
            .unwrap();

        assert_eq!(event.id, 4);
        assert_eq!(event.kind, ComplianceType::License);
        assert_eq!(event.status, ComplianceStatus::Overdue);
        assert_eq!(event.priority, Priority::Low);
    }

    #[test]
    fn test_builder_missing_date() {
        let result = ComplianceEvent::builder().title("T4 Slips").build();
        assert_eq!(result.unwrap_err(), ModelError::EmptyField("compliance event date"));
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Overdue".parse::<ComplianceStatus>().unwrap(), ComplianceStatus::Overdue);
        assert!("archived".parse::<ComplianceStatus>().is_err());
    }

    #[test]
    fn test_json_uses_type_key() {
        let json = r#"{
            "id": 2,
            "title": "Annual Report Filing",
            "description": "Annual report to Corporations Canada",
            "date": "2024-01-31",
            "type": "corporate",
            "status": "pending",
            "priority": "medium"
        }"#;
        let event: ComplianceEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.kind, ComplianceType::Corporate);
        assert_eq!(event.date, jan(31));
    }

    #[test]
    fn test_json_rejects_unknown_priority() {
        let json = r#"{"id":1,"title":"x","description":"","date":"2024-01-01",
            "type":"tax","status":"pending","priority":"urgent"}"#;
        let err = serde_json::from_str::<ComplianceEvent>(json).unwrap_err();
        assert!(err.to_string().contains("unknown priority value 'urgent'"));
    }
}
