use axum::{
    Form, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use time::UtcOffset;
use time::macros::format_description;

use crate::bench::{Status, Summary};
use crate::markdown;
use crate::templates::CaseDetailTemplate;

// HTML views

pub async fn case_detail(
    State(state): State<crate::SharedAppState>,
    Path(id): Path<String>,
) -> crate::AppResult<CaseDetailTemplate> {
    let case = state
        .bench
        .get(&id)
        .ok_or_else(|| crate::AppError::NotFound(id.clone()))?;

    let criteria_html = markdown::render(&case.description);

    Ok(CaseDetailTemplate {
        project_name: state.project_name.clone(),
        page_title: case.name.clone(),
        active_nav: "case-detail",
        app_version: state.app_version.clone(),
        case,
        criteria_html,
    })
}

// Form handlers (post/redirect/get back to the bench page)

#[derive(Debug, Deserialize)]
pub struct CaseForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: Status,
}

pub async fn add_case(
    State(state): State<crate::SharedAppState>,
    Form(form): Form<CaseForm>,
) -> Redirect {
    if state.bench.add(&form.name, &form.description).is_none() {
        tracing::debug!("ignoring add with empty name");
    }
    Redirect::to("/")
}

pub async fn set_case_status(
    State(state): State<crate::SharedAppState>,
    Path(id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Redirect {
    if !state.bench.set_status(&id, form.status) {
        tracing::debug!("ignoring status change for unknown case {}", id);
    }
    Redirect::to("/")
}

pub async fn remove_case(
    State(state): State<crate::SharedAppState>,
    Path(id): Path<String>,
) -> Redirect {
    if !state.bench.remove(&id) {
        tracing::debug!("ignoring removal of unknown case {}", id);
    }
    Redirect::to("/")
}

// API handlers

#[derive(Debug, Deserialize)]
pub struct CaseCreate {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CaseUpdate {
    pub status: Status,
}

pub async fn list_cases(
    State(state): State<crate::SharedAppState>,
    headers: HeaderMap,
) -> crate::AppResult<impl IntoResponse> {
    let view = state.bench.view();

    let max_updated_at = view.cases.iter().map(|c| c.updated_at).max();

    let etag = if let Some(last_mod) = max_updated_at {
        format!("\"{:x}-{}\"", last_mod.unix_timestamp(), view.cases.len())
    } else {
        format!("\"{}\"", view.cases.len())
    };

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH) {
        if if_none_match == etag.as_str() {
            return Ok(StatusCode::NOT_MODIFIED.into_response());
        }
    }

    let mut response_headers = HeaderMap::new();
    response_headers.insert(header::CACHE_CONTROL, "no-cache".parse().unwrap());
    response_headers.insert(header::ETAG, etag.parse().unwrap());

    if let Some(last_mod) = max_updated_at {
        let http_date = format_description!(
            "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
        );
        if let Ok(last_mod_str) = last_mod.to_offset(UtcOffset::UTC).format(&http_date) {
            response_headers.insert(header::LAST_MODIFIED, last_mod_str.parse().unwrap());
        }
    }

    Ok((response_headers, Json(view.cases)).into_response())
}

pub async fn create_case(
    State(state): State<crate::SharedAppState>,
    Json(create): Json<CaseCreate>,
) -> crate::AppResult<Json<serde_json::Value>> {
    let case = state
        .bench
        .add(&create.name, create.description.as_deref().unwrap_or(""))
        .ok_or_else(|| crate::AppError::BadRequest("name must not be empty".to_string()))?;

    Ok(Json(serde_json::json!({ "id": case.id })))
}

pub async fn update_case(
    State(state): State<crate::SharedAppState>,
    Path(id): Path<String>,
    Json(update): Json<CaseUpdate>,
) -> crate::AppResult<StatusCode> {
    if state.bench.set_status(&id, update.status) {
        Ok(StatusCode::OK)
    } else {
        Err(crate::AppError::NotFound(id))
    }
}

pub async fn delete_case(
    State(state): State<crate::SharedAppState>,
    Path(id): Path<String>,
) -> crate::AppResult<StatusCode> {
    if state.bench.remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(crate::AppError::NotFound(id))
    }
}

pub async fn summary(State(state): State<crate::SharedAppState>) -> Json<Summary> {
    Json(state.bench.view().summary)
}
