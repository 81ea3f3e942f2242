use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

const MONTH_LABELS: [&str; 12] = [
    "JANV", "FÉV", "MARS", "AVR", "MAI", "JUIN", "JUIL", "AOÛT", "SEPT", "OCT", "NOV", "DÉC",
];

/// Colour family an agenda card is styled with.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgendaTone {
    #[default]
    PrimaryRed,
    WarmOrange,
    GoldenYellow,
    NatureGreen,
}

impl AgendaTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryRed => "primary-red",
            Self::WarmOrange => "warm-orange",
            Self::GoldenYellow => "golden-yellow",
            Self::NatureGreen => "nature-green",
        }
    }
}

impl std::fmt::Display for AgendaTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgendaTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary-red" => Ok(Self::PrimaryRed),
            "warm-orange" => Ok(Self::WarmOrange),
            "golden-yellow" => Ok(Self::GoldenYellow),
            "nature-green" => Ok(Self::NatureGreen),
            _ => Err(format!("invalid agenda tone: {}", s)),
        }
    }
}

/// Extra details carried by "Rencontre Retour Aux Sources" meetings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_person: Option<String>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub id: String,
    pub date: NaiveDateTime,
    /// Explicit day label; derived from `date` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_label: Option<String>,
    /// Explicit month label; derived from `date` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_label: Option<String>,
    pub title_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_emphasis: Option<String>,
    pub location: String,
    #[serde(default)]
    pub tone: AgendaTone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting: Option<Meeting>,
}

impl AgendaItem {
    pub fn day_label(&self) -> String {
        self.day_label
            .clone()
            .unwrap_or_else(|| derived_day_label(&self.date))
    }

    pub fn month_label(&self) -> String {
        self.month_label
            .clone()
            .unwrap_or_else(|| derived_month_label(&self.date).to_string())
    }

    pub fn is_meeting(&self) -> bool {
        self.meeting.is_some()
    }

    /// True when an explicit label disagrees with the one derived from `date`.
    pub fn has_label_mismatch(&self) -> bool {
        let day = self
            .day_label
            .as_deref()
            .is_some_and(|d| d != derived_day_label(&self.date));
        let month = self
            .month_label
            .as_deref()
            .is_some_and(|m| m != derived_month_label(&self.date));

        day || month
    }
}

pub fn derived_day_label(date: &NaiveDateTime) -> String {
    format!("{:02}", date.day())
}

pub fn derived_month_label(date: &NaiveDateTime) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
    }

    fn item(date: NaiveDateTime) -> AgendaItem {
        AgendaItem {
            id: "x".into(),
            date,
            day_label: None,
            month_label: None,
            title_lines: vec!["Rencontre".into()],
            title_emphasis: None,
            location: "Yaoundé".into(),
            tone: AgendaTone::default(),
            time_label: None,
            meeting: None,
        }
    }

    #[test]
    fn test_labels_derived_from_date() {
        let it = item(at(2025, 8, 2));
        assert_eq!(it.day_label(), "02");
        assert_eq!(it.month_label(), "AOÛT");
        assert!(!it.has_label_mismatch());
    }

    #[test]
    fn test_explicit_label_mismatch_detected() {
        let mut it = item(at(2025, 6, 15));
        it.month_label = Some("JUIL".into());
        assert_eq!(it.month_label(), "JUIL");
        assert!(it.has_label_mismatch());
    }

    #[test]
    fn test_tone_parses_css_class() {
        assert_eq!("warm-orange".parse::<AgendaTone>(), Ok(AgendaTone::WarmOrange));
        assert!("teal".parse::<AgendaTone>().is_err());
    }

    #[test]
    fn test_tone_defaults_to_primary_red() {
        assert_eq!(AgendaTone::default(), AgendaTone::PrimaryRed);
        assert_eq!(AgendaTone::default().to_string(), "primary-red");
    }
}
