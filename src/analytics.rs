use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::model::attendance::AttendanceRecord;
use crate::model::schedule::EmployeeProfile;
use crate::model::summary::{
    CombinedSummary, DailyBreakdown, DailyStat, DayStatus, MonthlySummary, PeriodSummary,
};

/// Sentinel the dashboard sends to request the combined view.
pub const ALL_EMPLOYEES: &str = "ALL_EMPLOYEES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("no employee found for selector `{0}`")]
    EmployeeNotFound(String),
}

/// Validated month/year pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, AnalyticsError> {
        if !(1..=12).contains(&month) {
            return Err(AnalyticsError::InvalidRequest(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(1000..=9999).contains(&year) {
            return Err(AnalyticsError::InvalidRequest(format!(
                "year must be a 4-digit calendar year, got {year}"
            )));
        }
        Ok(Self { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeSelector {
    All,
    One(String),
}

impl EmployeeSelector {
    pub fn parse(raw: &str) -> Result<Self, AnalyticsError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalyticsError::InvalidRequest(
                "employee selector must not be empty".to_string(),
            ));
        }
        if trimmed == ALL_EMPLOYEES || trimmed.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::One(trimmed.to_string()))
        }
    }
}

/// Pure aggregation from attendance records to a monthly summary.
///
/// Records outside `period` are excluded here, whatever the caller fetched.
/// A known employee with no records in the period yields zeroed totals; an
/// employee id missing from the roster is a distinct not-found error.
pub fn compute_summary(
    records: &[AttendanceRecord],
    roster: &[EmployeeProfile],
    period: Period,
    selector: &EmployeeSelector,
) -> Result<MonthlySummary, AnalyticsError> {
    match selector {
        EmployeeSelector::One(id) => {
            let profile = roster
                .iter()
                .find(|p| p.id == *id)
                .ok_or_else(|| AnalyticsError::EmployeeNotFound(id.clone()))?;
            Ok(MonthlySummary::Employee(employee_summary(
                records, profile, period,
            )))
        }
        EmployeeSelector::All => Ok(MonthlySummary::Combined(combined_summary(
            records, roster, period,
        ))),
    }
}

fn employee_summary(
    records: &[AttendanceRecord],
    profile: &EmployeeProfile,
    period: Period,
) -> PeriodSummary {
    let breakdown = daily_stats(records, profile, period);

    let mut total_worked = 0.0;
    let mut total_expected = 0.0;
    let mut leaves = 0u32;
    for stat in &breakdown {
        let (worked, expected) = contribution(stat);
        total_worked += worked;
        total_expected += expected;
        if stat.status == DayStatus::Leave {
            leaves += 1;
        }
    }

    PeriodSummary {
        employee_id: profile.id.clone(),
        employee_name: profile.name.clone(),
        month: period.month(),
        year: period.year(),
        total_expected_hours: total_expected,
        total_worked_hours: total_worked,
        leaves_used: leaves,
        productivity_percentage: productivity(total_worked, total_expected),
        daily_breakdown: breakdown,
    }
}

fn combined_summary(
    records: &[AttendanceRecord],
    roster: &[EmployeeProfile],
    period: Period,
) -> CombinedSummary {
    let total_employees = roster.len() as u32;

    let mut days: BTreeMap<NaiveDate, DailyBreakdown> = BTreeMap::new();
    let mut total_worked = 0.0;
    let mut total_expected = 0.0;
    let mut leaves = 0u32;

    for profile in roster {
        for stat in daily_stats(records, profile, period) {
            let (worked, expected) = contribution(&stat);
            total_worked += worked;
            total_expected += expected;
            if stat.status == DayStatus::Leave {
                leaves += 1;
            }

            let entry = days.entry(stat.date).or_insert_with(|| DailyBreakdown {
                date: stat.date,
                total_worked_hours: 0.0,
                total_expected_hours: 0.0,
                employees_present: 0,
                total_employees,
            });
            entry.total_worked_hours += worked;
            entry.total_expected_hours += expected;
            if stat.status == DayStatus::Present && stat.worked_hours > 0.0 {
                entry.employees_present += 1;
            }
        }
    }

    CombinedSummary {
        employee_name: "All Employees".to_string(),
        month: period.month(),
        year: period.year(),
        employee_count: total_employees,
        total_expected_hours: total_expected,
        total_worked_hours: total_worked,
        leaves_used: leaves,
        productivity_percentage: productivity(total_worked, total_expected),
        daily_breakdown: days.into_values().collect(),
    }
}

fn daily_stats(
    records: &[AttendanceRecord],
    profile: &EmployeeProfile,
    period: Period,
) -> Vec<DailyStat> {
    let mut stats: Vec<DailyStat> = records
        .iter()
        .filter(|r| r.employee_id == profile.id && period.contains(r.date))
        .map(|r| {
            let expected = profile.schedule.expected_for(r.date.weekday());
            let (status, worked) = classify(r, expected);
            DailyStat {
                date: r.date,
                in_time: r.in_time,
                out_time: r.out_time,
                worked_hours: worked,
                expected_hours: expected,
                status,
            }
        })
        .collect();
    stats.sort_by_key(|s| s.date);
    stats
}

fn classify(record: &AttendanceRecord, expected: f64) -> (DayStatus, f64) {
    if record.is_leave {
        return (DayStatus::Leave, 0.0);
    }
    let worked = worked_hours(record);
    if expected == 0.0 {
        (DayStatus::OffDay, worked)
    } else {
        (DayStatus::Present, worked)
    }
}

// Inconsistent punches (out before in) floor to zero rather than going
// negative; overnight shifts are not supported by the record format.
fn worked_hours(record: &AttendanceRecord) -> f64 {
    match (record.in_time, record.out_time) {
        (Some(in_time), Some(out_time)) => {
            let seconds = (out_time - in_time).num_seconds();
            if seconds > 0 {
                seconds as f64 / 3600.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

// Off days carry no expectation and never feed the totals, so unscheduled
// hours cannot push the percentage past what the schedule asks for.
fn contribution(stat: &DailyStat) -> (f64, f64) {
    match stat.status {
        DayStatus::OffDay => (0.0, 0.0),
        DayStatus::Leave | DayStatus::Present => (stat.worked_hours, stat.expected_hours),
    }
}

fn productivity(worked: f64, expected: f64) -> f64 {
    if expected == 0.0 {
        0.0
    } else {
        round1(worked / expected * 100.0)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
