use axum::extract::State;

use crate::bench::Status;
use crate::templates::{BoardColumn, BoardTemplate};

pub async fn board(State(state): State<crate::SharedAppState>) -> BoardTemplate {
    let view = state.bench.view();

    // view.cases is already rank-then-recency sorted, so filtering per status
    // leaves each column in recency order
    let columns = Status::ALL
        .iter()
        .map(|&status| BoardColumn {
            name: status.to_string(),
            status: status.as_str(),
            cases: view
                .cases
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect(),
        })
        .collect();

    BoardTemplate {
        project_name: state.project_name.clone(),
        page_title: "Board".to_string(),
        active_nav: "board",
        app_version: state.app_version.clone(),
        columns,
    }
}
