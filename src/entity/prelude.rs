//! Pré-importação das entidades

pub use super::assessments::{
    ActiveModel as AssessmentActiveModel, Entity as Assessments, Model as AssessmentModel,
};
pub use super::award_questions::{
    ActiveModel as AwardQuestionActiveModel, Entity as AwardQuestions, Model as AwardQuestionModel,
};
pub use super::awards::{ActiveModel as AwardActiveModel, Entity as Awards, Model as AwardModel};
pub use super::categories::{
    ActiveModel as CategoryActiveModel, Entity as Categories, Model as CategoryModel,
};
pub use super::evaluator_categories::{
    ActiveModel as EvaluatorCategoryActiveModel, Entity as EvaluatorCategories,
    Model as EvaluatorCategoryModel,
};
pub use super::evaluators::{
    ActiveModel as EvaluatorActiveModel, Entity as Evaluators, Model as EvaluatorModel,
};
pub use super::project_students::{
    ActiveModel as ProjectStudentActiveModel, Entity as ProjectStudents,
    Model as ProjectStudentModel,
};
pub use super::projects::{
    ActiveModel as ProjectActiveModel, Entity as Projects, Model as ProjectModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::responses::{
    ActiveModel as ResponseActiveModel, Entity as Responses, Model as ResponseModel,
};
pub use super::school_grades::{
    ActiveModel as SchoolGradeActiveModel, Entity as SchoolGrades, Model as SchoolGradeModel,
};
pub use super::schools::{
    ActiveModel as SchoolActiveModel, Entity as Schools, Model as SchoolModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
