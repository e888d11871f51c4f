use askama::Template;

use crate::bench;

pub mod filters {
    use time::OffsetDateTime;
    use time::macros::format_description;

    pub fn format_date(date: &OffsetDateTime) -> askama::Result<String> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]");
        date.format(&format)
            .map_err(|e| askama::Error::Custom(Box::new(e)))
    }
}

pub struct BoardColumn {
    pub name: String,
    pub status: &'static str,
    pub cases: Vec<bench::TestCase>,
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub project_name: String,
    pub page_title: String,
    pub active_nav: &'static str,
    pub app_version: String,
    pub summary: bench::Summary,
    pub cases: Vec<bench::TestCase>,
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub project_name: String,
    pub page_title: String,
    pub active_nav: &'static str,
    pub app_version: String,
    pub columns: Vec<BoardColumn>,
}

#[derive(Template)]
#[template(path = "case.html")]
pub struct CaseDetailTemplate {
    pub project_name: String,
    pub page_title: String,
    pub active_nav: &'static str,
    pub app_version: String,
    pub case: bench::TestCase,
    pub criteria_html: String,
}
