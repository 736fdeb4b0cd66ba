use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

/// Classification of a single calendar day for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DayStatus {
    Present,
    Leave,
    OffDay,
}

/// Derived per-day figures for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyStat {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "10:00:00", value_type = String, nullable = true)]
    pub in_time: Option<NaiveTime>,

    #[schema(example = "18:30:00", value_type = String, nullable = true)]
    pub out_time: Option<NaiveTime>,

    #[schema(example = 8.5)]
    pub worked_hours: f64,

    #[schema(example = 8.5)]
    pub expected_hours: f64,

    pub status: DayStatus,
}

/// Monthly aggregate for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeId": "EMP-001",
        "employeeName": "John Doe",
        "month": 1,
        "year": 2024,
        "totalExpectedHours": 17.0,
        "totalWorkedHours": 16.3,
        "leavesUsed": 0,
        "productivityPercentage": 95.9,
        "dailyBreakdown": []
    })
)]
pub struct PeriodSummary {
    pub employee_id: String,
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub total_expected_hours: f64,
    pub total_worked_hours: f64,
    pub leaves_used: u32,
    pub productivity_percentage: f64,
    pub daily_breakdown: Vec<DailyStat>,
}

/// Per-day aggregate across all employees.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyBreakdown {
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = 17.0)]
    pub total_worked_hours: f64,

    #[schema(example = 17.0)]
    pub total_expected_hours: f64,

    #[schema(example = 2)]
    pub employees_present: u32,

    #[schema(example = 2)]
    pub total_employees: u32,
}

/// Monthly aggregate across all employees.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "employeeName": "All Employees",
        "month": 1,
        "year": 2024,
        "employeeCount": 2,
        "totalExpectedHours": 340.0,
        "totalWorkedHours": 315.8,
        "leavesUsed": 3,
        "productivityPercentage": 92.9,
        "dailyBreakdown": []
    })
)]
pub struct CombinedSummary {
    pub employee_name: String,
    pub month: u32,
    pub year: i32,
    pub employee_count: u32,
    pub total_expected_hours: f64,
    pub total_worked_hours: f64,
    pub leaves_used: u32,
    pub productivity_percentage: f64,
    pub daily_breakdown: Vec<DailyBreakdown>,
}

/// Result of an analytics query, single-employee or combined.
///
/// Serializes as the inner object plus a `scope` discriminator, so existing
/// dashboard clients keep reading the flat fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scope", rename_all = "camelCase")]
pub enum MonthlySummary {
    Employee(PeriodSummary),
    Combined(CombinedSummary),
}
