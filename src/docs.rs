use crate::api::resumen::ResumenRequest;
use crate::error::ErrorBody;
use crate::model::attendance::EmployeeSummary;
use utoipa::openapi;
use utoipa::{Modify, OpenApi};

/// Paths are declared under `/api`; this moves them under the configured prefix.
pub struct ApiPrefix(pub String);

impl Modify for ApiPrefix {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let prefix = self.0.trim_end_matches('/');
        let paths = std::mem::take(&mut openapi.paths.paths);
        openapi.paths.paths = paths
            .into_iter()
            .map(|(path, item)| match path.strip_prefix("/api/") {
                Some(rest) => (format!("{prefix}/{rest}"), item),
                None => (path, item),
            })
            .collect();
    }
}

/// OpenAPI document with paths matching where the API is mounted.
pub fn openapi(api_prefix: &str) -> openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    ApiPrefix(api_prefix.to_string()).modify(&mut doc);
    doc
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resumen de Asistencias API",
        version = "1.0.0",
        description = r#"
## Attendance summaries

Counts, per employee, the days they were **on time** (`asistencias`), **late**
(`retardos`) and **absent** (`faltas`) between two dates, inclusive.

- A day with no attendance record is an absence.
- A record with `estado = "retardo"` is a late arrival.
- Any other record is on time.

Dates are `YYYY-MM-DD`. Missing or malformed dates, or a start after the end,
are rejected with `400` and an `{"error": "..."}` body.
"#,
    ),
    paths(
        crate::api::resumen::resumen_api
    ),
    components(
        schemas(
            ResumenRequest,
            EmployeeSummary,
            ErrorBody
        )
    ),
    tags(
        (name = "Resumen", description = "Attendance summary APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod test {
    use super::openapi;

    #[test]
    fn documents_resumen_path() {
        let doc = openapi("/api");
        assert!(doc.paths.paths.contains_key("/api/resumen"));
    }

    #[test]
    fn follows_configured_prefix() {
        let doc = openapi("/asistencias/v1/");
        assert!(doc.paths.paths.contains_key("/asistencias/v1/resumen"));
        assert!(!doc.paths.paths.contains_key("/api/resumen"));
    }
}
