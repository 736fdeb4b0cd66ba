use crate::analytics::{self, AnalyticsError, EmployeeSelector, Period};
use crate::store::AttendanceStore;
use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyticsQuery {
    pub employee: Option<String>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeEntry {
    #[schema(example = "EMP-001")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

/// Monthly productivity analytics
#[utoipa::path(
    get,
    path = "/api/v1/analytics",
    params(
        ("employee", Query, description = "Employee id, or ALL_EMPLOYEES for the combined view"),
        ("month", Query, description = "Month number, 1-12"),
        ("year", Query, description = "4-digit calendar year")
    ),
    responses(
        (status = 200, description = "Monthly summary, single-employee or combined", body = Object, example = json!({
            "scope": "combined",
            "employeeName": "All Employees",
            "month": 1,
            "year": 2024,
            "employeeCount": 2,
            "totalExpectedHours": 51.0,
            "totalWorkedHours": 33.75,
            "leavesUsed": 2,
            "productivityPercentage": 66.2,
            "dailyBreakdown": []
        })),
        (status = 400, description = "Missing or invalid selector/period", body = Object, example = json!({
            "error": "missing employee selector"
        })),
        (status = 404, description = "Unknown employee", body = Object, example = json!({
            "error": "no employee found for selector `EMP-999`"
        })),
        (status = 500, description = "Attendance data source unavailable", body = Object, example = json!({
            "error": "internal server error"
        }))
    ),
    tag = "Analytics"
)]
pub async fn get_analytics(
    store: web::Data<dyn AttendanceStore>,
    query: web::Query<AnalyticsQuery>,
) -> actix_web::Result<impl Responder> {
    let raw_selector = match query.employee.as_deref() {
        Some(raw) => raw,
        None => return Ok(bad_request("missing employee selector")),
    };
    let selector = match EmployeeSelector::parse(raw_selector) {
        Ok(selector) => selector,
        Err(e) => return Ok(bad_request(&e.to_string())),
    };
    let month = match query.month {
        Some(month) => month,
        None => return Ok(bad_request("missing month")),
    };
    let year = match query.year {
        Some(year) => year,
        None => return Ok(bad_request("missing year")),
    };
    let period = match Period::new(month, year) {
        Ok(period) => period,
        Err(e) => return Ok(bad_request(&e.to_string())),
    };

    let roster = match store.roster() {
        Ok(roster) => roster,
        Err(e) => {
            error!(error = %e, "failed to load roster");
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "internal server error"
            })));
        }
    };
    let records = match store.records_for_period(period) {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "failed to load attendance records");
            return Ok(HttpResponse::InternalServerError().json(json!({
                "error": "internal server error"
            })));
        }
    };

    match analytics::compute_summary(&records, &roster, period, &selector) {
        Ok(summary) => Ok(HttpResponse::Ok().json(summary)),
        Err(e @ AnalyticsError::EmployeeNotFound(_)) => {
            Ok(HttpResponse::NotFound().json(json!({ "error": e.to_string() })))
        }
        Err(e) => Ok(bad_request(&e.to_string())),
    }
}

/// Employees available to the analytics selector
#[utoipa::path(
    get,
    path = "/api/v1/analytics/employees",
    responses(
        (status = 200, description = "Known employees", body = [EmployeeEntry]),
        (status = 500, description = "Attendance data source unavailable", body = Object, example = json!({
            "error": "internal server error"
        }))
    ),
    tag = "Analytics"
)]
pub async fn list_employees(
    store: web::Data<dyn AttendanceStore>,
) -> actix_web::Result<impl Responder> {
    match store.roster() {
        Ok(roster) => {
            let entries: Vec<EmployeeEntry> = roster
                .into_iter()
                .map(|p| EmployeeEntry {
                    id: p.id,
                    name: p.name,
                })
                .collect();
            Ok(HttpResponse::Ok().json(entries))
        }
        Err(e) => {
            error!(error = %e, "failed to load roster");
            Ok(HttpResponse::InternalServerError().json(json!({
                "error": "internal server error"
            })))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web::Data};
    use std::sync::Arc;

    fn store_data() -> Data<dyn AttendanceStore> {
        let store: Arc<dyn AttendanceStore> = Arc::new(MemoryStore::sample().unwrap());
        Data::from(store)
    }

    macro_rules! analytics_app {
        () => {
            test::init_service(
                App::new().app_data(store_data()).service(
                    web::scope("/analytics")
                        .service(web::resource("").route(web::get().to(get_analytics)))
                        .service(
                            web::resource("/employees").route(web::get().to(list_employees)),
                        ),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn missing_selector_is_a_client_error() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics?month=1&year=2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "missing employee selector");
    }

    #[actix_web::test]
    async fn invalid_month_is_a_client_error() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics?employee=ALL_EMPLOYEES&month=13&year=2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn combined_view_returns_the_dashboard_contract() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics?employee=ALL_EMPLOYEES&month=1&year=2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["scope"], "combined");
        assert_eq!(body["employeeCount"], 2);
        assert_eq!(body["leavesUsed"], 2);
        assert_eq!(body["totalExpectedHours"], 51.0);
        assert_eq!(body["totalWorkedHours"], 33.75);
        assert_eq!(body["productivityPercentage"], 66.2);
        let breakdown = body["dailyBreakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown[0]["date"], "2024-01-01");
        assert_eq!(breakdown[0]["employeesPresent"], 2);
        assert_eq!(breakdown[0]["totalEmployees"], 2);
    }

    #[actix_web::test]
    async fn single_employee_view_reports_per_day_stats() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics?employee=EMP-001&month=1&year=2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["scope"], "employee");
        assert_eq!(body["employeeId"], "EMP-001");
        assert_eq!(body["totalWorkedHours"], 17.0);
        assert_eq!(body["totalExpectedHours"], 25.5);
        assert_eq!(body["leavesUsed"], 1);
        let breakdown = body["dailyBreakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[2]["status"], "offDay");
        assert_eq!(breakdown[3]["status"], "leave");
    }

    #[actix_web::test]
    async fn unknown_employee_is_not_found() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics?employee=EMP-999&month=1&year=2024")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn employee_listing_backs_the_selector() {
        let app = analytics_app!();
        let req = test::TestRequest::get()
            .uri("/analytics/employees")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "EMP-001");
    }
}
