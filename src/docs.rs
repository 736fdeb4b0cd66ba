use crate::api::analytics::{AnalyticsQuery, EmployeeEntry};
use crate::model::attendance::AttendanceRecord;
use crate::model::schedule::{EmployeeProfile, WeeklySchedule};
use crate::model::summary::{
    CombinedSummary, DailyBreakdown, DailyStat, DayStatus, PeriodSummary,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Analytics API",
        version = "1.0.0",
        description = r#"
## Attendance Productivity Analytics

This API computes employee attendance/productivity analytics for a selected
month and year, from raw per-day attendance records and expected schedules.

### 🔹 Key Features
- **Per-employee analytics**
  - Worked vs expected hours, leaves used, productivity percentage
  - Per-day breakdown with Present / Leave / Off Day classification
- **Combined analytics**
  - Totals across all employees plus a per-day presence breakdown
- **Employee listing**
  - Roster backing the dashboard's employee selector

### 📦 Response Format
- JSON-based RESTful responses with camelCase keys
- Productivity percentage is always derived from the aggregate totals,
  with 0/0 defined as 0%

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::analytics::get_analytics,
        crate::api::analytics::list_employees
    ),
    components(
        schemas(
            AnalyticsQuery,
            EmployeeEntry,
            AttendanceRecord,
            EmployeeProfile,
            WeeklySchedule,
            PeriodSummary,
            CombinedSummary,
            DailyBreakdown,
            DailyStat,
            DayStatus
        )
    ),
    tags(
        (name = "Analytics", description = "Productivity analytics APIs"),
    )
)]
pub struct ApiDoc;
