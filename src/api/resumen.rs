use crate::api::pages;
use crate::error::{AppError, ErrorBody};
use crate::model::attendance::EmployeeSummary;
use crate::report::ReportService;
use crate::report::dates::DateRange;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::ToSchema;

/// Date range as submitted by the form or the JSON API. Fields are optional
/// here so missing values get the same error as malformed ones.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ResumenRequest {
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub inicio: Option<String>,
    #[schema(example = "2024-01-31", format = "date", value_type = String)]
    pub fin: Option<String>,
}

impl ResumenRequest {
    fn range(&self) -> Result<DateRange, AppError> {
        DateRange::parse(self.inicio.as_deref(), self.fin.as_deref())
    }
}

/// Input form
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::form_page())
}

/// HTML results page for the form
#[instrument(skip(service))]
pub async fn resumen_form(
    service: web::Data<ReportService>,
    form: web::Form<ResumenRequest>,
) -> HttpResponse {
    let result = match form.range() {
        Ok(range) => service.summary(range).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(rows) => HttpResponse::Ok().content_type(ContentType::html()).body(
            pages::results_page(
                &rows,
                form.inicio.as_deref().unwrap_or_default(),
                form.fin.as_deref().unwrap_or_default(),
            ),
        ),
        Err(e) => {
            warn!(error = %e, "Summary page failed");
            HttpResponse::build(e.status_code())
                .content_type(ContentType::html())
                .body(pages::error_page(&e.to_string()))
        }
    }
}

/// Attendance summary as JSON
#[utoipa::path(
    post,
    path = "/api/resumen",
    request_body = ResumenRequest,
    responses(
        (status = 200, description = "One summary per employee", body = [EmployeeSummary]),
        (status = 400, description = "Missing or malformed dates", body = ErrorBody, example = json!({
            "error": "fin is required"
        })),
        (status = 503, description = "Attendance store unavailable", body = ErrorBody)
    ),
    tag = "Resumen"
)]
#[instrument(skip(service))]
pub async fn resumen_api(
    service: web::Data<ReportService>,
    payload: web::Json<ResumenRequest>,
) -> Result<web::Json<Vec<EmployeeSummary>>, AppError> {
    let range = payload.range()?;
    let report = service.summary(range).await?;
    Ok(web::Json(report))
}
