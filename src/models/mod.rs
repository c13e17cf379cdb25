pub mod assessments;
pub mod auth;
pub mod awards;
pub mod categories;
pub mod common;
pub mod dashboard;
pub mod evaluators;
pub mod projects;
pub mod questions;
pub mod responses;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;
pub use common::AppStartTime;
