use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw per-employee, per-day attendance entry as supplied by the record store.
///
/// When `is_leave` is set, both punch times are absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "10:00:00", value_type = String, nullable = true)]
    #[serde(default)]
    pub in_time: Option<NaiveTime>,

    #[schema(example = "18:30:00", value_type = String, nullable = true)]
    #[serde(default)]
    pub out_time: Option<NaiveTime>,

    #[serde(default)]
    pub is_leave: bool,
}
