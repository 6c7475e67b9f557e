use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse};
use log::{debug, warn};
use serde::Deserialize;

use crate::{field_line, read_database, DatabaseError, FieldGroup, Major, Summary};

const BANNER: &str = "This is the list of our students";

/// Query string shared by the students routes.
#[derive(Debug, Deserialize)]
pub struct DatabaseQuery {
    pub path: Option<String>,
}

/// Banner, then one line per field in lexicographic order.
pub fn render_all_students(summary: &Summary) -> String {
    let mut response = String::from(BANNER);
    for group in summary.sorted() {
        response.push('\n');
        response.push_str(&field_line(group));
    }
    response.trim_end().to_string()
}

/// Names studying `major`. A major nobody studies renders an empty list.
pub fn render_major(summary: &Summary, major: Major) -> String {
    let list = summary
        .get(major.as_str())
        .map(FieldGroup::list)
        .unwrap_or_default();
    format!("List: {}", list)
}

fn text(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

fn server_error(body: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type(ContentType::plaintext())
        .body(body)
}

/// Loads the database named by the `path` query parameter.
///
/// A query string that does not parse is a load failure.
async fn load_database(req: &HttpRequest) -> Result<Summary, DatabaseError> {
    let query = web::Query::<DatabaseQuery>::from_query(req.query_string()).map_err(|e| {
        debug!("Cannot parse query {:?}: {}", req.query_string(), e);
        DatabaseError::Load
    })?;
    let path = query.into_inner().path.unwrap_or_default();
    read_database(&path).await.map_err(|e| {
        warn!("Loading students from {:?} failed: {}", path, e);
        e
    })
}

#[get("/students")]
pub async fn get_all_students(req: HttpRequest) -> HttpResponse {
    match load_database(&req).await {
        Ok(summary) => text(render_all_students(&summary)),
        Err(e) => server_error(e.to_string()),
    }
}

#[get("/students/{major}")]
pub async fn get_all_students_by_major(
    major: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let major = match major.parse::<Major>() {
        Ok(major) => major,
        Err(e) => return server_error(e.to_string()),
    };

    match load_database(&req).await {
        Ok(summary) => text(render_major(&summary, major)),
        Err(e) => server_error(e.to_string()),
    }
}
