//! Entidades SeaORM
//!
//! Estas entidades são usadas nas operações de banco de dados, separadas dos
//! modelos de negócio do módulo models. A camada storage faz o CRUD com elas
//! e converte para os modelos de negócio.

pub mod prelude;

pub mod assessments;
pub mod award_questions;
pub mod awards;
pub mod categories;
pub mod evaluator_categories;
pub mod evaluators;
pub mod project_students;
pub mod projects;
pub mod questions;
pub mod responses;
pub mod school_grades;
pub mod schools;
pub mod students;
pub mod users;
