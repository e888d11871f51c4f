pub mod board;
pub mod cases;
pub mod general;
pub mod landing;

pub use board::board;
pub use cases::{
    add_case, case_detail, create_case, delete_case, list_cases, remove_case, set_case_status,
    summary, update_case,
};
pub use general::{health_check, serve_css, serve_favicon, serve_js};
pub use landing::landing;
