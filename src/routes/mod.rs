pub mod assessments;

pub mod auth;

pub mod awards;

pub mod dashboard;

pub mod evaluators;

pub mod projects;

pub mod questions;

pub mod responses;

pub use assessments::configure_assessment_routes;
pub use auth::configure_auth_routes;
pub use awards::configure_award_routes;
pub use dashboard::configure_dashboard_routes;
pub use evaluators::configure_evaluator_routes;
pub use projects::configure_project_routes;
pub use questions::configure_question_routes;
pub use responses::configure_response_routes;
