use axum::extract::State;

use crate::templates::LandingTemplate;

pub async fn landing(State(state): State<crate::SharedAppState>) -> LandingTemplate {
    let view = state.bench.view();

    LandingTemplate {
        project_name: state.project_name.clone(),
        page_title: String::new(),
        active_nav: "bench",
        app_version: state.app_version.clone(),
        summary: view.summary,
        cases: view.cases,
    }
}
