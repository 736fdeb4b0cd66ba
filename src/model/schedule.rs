use chrono::Weekday;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Expected working hours per weekday. Zero marks a non-working day (Off Day).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    #[serde(default)]
    #[schema(example = 8.5)]
    pub monday: f64,
    #[serde(default)]
    #[schema(example = 8.5)]
    pub tuesday: f64,
    #[serde(default)]
    #[schema(example = 8.5)]
    pub wednesday: f64,
    #[serde(default)]
    #[schema(example = 8.5)]
    pub thursday: f64,
    #[serde(default)]
    #[schema(example = 8.5)]
    pub friday: f64,
    #[serde(default)]
    #[schema(example = 0.0)]
    pub saturday: f64,
    #[serde(default)]
    #[schema(example = 0.0)]
    pub sunday: f64,
}

impl WeeklySchedule {
    /// Monday-to-Friday schedule with the given daily hours, weekend off.
    pub fn weekdays(hours: f64) -> Self {
        Self {
            monday: hours,
            tuesday: hours,
            wednesday: hours,
            thursday: hours,
            friday: hours,
            saturday: 0.0,
            sunday: 0.0,
        }
    }

    pub fn expected_for(&self, weekday: Weekday) -> f64 {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// An employee together with their expected weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": "EMP-001",
        "name": "John Doe",
        "schedule": {
            "monday": 8.5, "tuesday": 8.5, "wednesday": 8.5,
            "thursday": 8.5, "friday": 8.5, "saturday": 0.0, "sunday": 0.0
        }
    })
)]
pub struct EmployeeProfile {
    #[schema(example = "EMP-001")]
    pub id: String,

    #[schema(example = "John Doe")]
    pub name: String,

    pub schedule: WeeklySchedule,
}
