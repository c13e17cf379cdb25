pub mod assessments;
pub mod auth;
pub mod awards;
pub mod dashboard;
pub mod evaluators;
pub mod projects;
pub mod questions;
pub mod responses;
pub mod scoring;

pub use assessments::AssessmentService;
pub use auth::AuthService;
pub use awards::AwardService;
pub use dashboard::DashboardService;
pub use evaluators::EvaluatorService;
pub use projects::ProjectService;
pub use questions::QuestionService;
pub use responses::ResponseService;
