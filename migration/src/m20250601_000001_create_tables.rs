use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Tabela de usuários
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::DisplayName).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de graus de ensino
        manager
            .create_table(
                Table::create()
                    .table(SchoolGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolGrades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolGrades::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de escolas
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schools::Name).string().not_null())
                    .col(ColumnDef::new(Schools::City).string().null())
                    .col(ColumnDef::new(Schools::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Schools::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de estudantes
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::SchoolId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Students::SchoolGradeId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Students::Table, Students::SchoolGradeId)
                            .to(SchoolGrades::Table, SchoolGrades::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de categorias (auto-referência para subcategorias)
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Categories::Name).string().not_null())
                    .col(
                        ColumnDef::new(Categories::MainCategoryId)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Categories::DeletedAt).big_integer().null())
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Categories::Table, Categories::MainCategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de trabalhos
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string().not_null())
                    .col(ColumnDef::new(Projects::Year).integer().not_null())
                    .col(ColumnDef::new(Projects::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Projects::ProjectType).integer().not_null())
                    .col(ColumnDef::new(Projects::ExternalId).string().not_null())
                    .col(ColumnDef::new(Projects::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Projects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Projects::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Projects::Table, Projects::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Vínculo trabalho-estudante
        manager
            .create_table(
                Table::create()
                    .table(ProjectStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectStudents::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjectStudents::Table, ProjectStudents::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProjectStudents::Table, ProjectStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de avaliadores
        manager
            .create_table(
                Table::create()
                    .table(Evaluators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluators::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Evaluators::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Evaluators::Pin)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Evaluators::DeletedAt).big_integer().null())
                    .col(
                        ColumnDef::new(Evaluators::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluators::Table, Evaluators::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Vínculo avaliador-categoria
        manager
            .create_table(
                Table::create()
                    .table(EvaluatorCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluatorCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluatorCategories::EvaluatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluatorCategories::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                EvaluatorCategories::Table,
                                EvaluatorCategories::EvaluatorId,
                            )
                            .to(Evaluators::Table, Evaluators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluatorCategories::Table, EvaluatorCategories::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de avaliações (atribuição avaliador x trabalho)
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::EvaluatorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Assessments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::EvaluatorId)
                            .to(Evaluators::Table, Evaluators::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de perguntas do questionário
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Questions::ScientificText)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Questions::TechnologicalText)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::QuestionType).integer().not_null())
                    .col(
                        ColumnDef::new(Questions::NumberAlternatives)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Questions::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Questions::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Tabela de respostas
        manager
            .create_table(
                Table::create()
                    .table(Responses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Responses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Responses::AssessmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Responses::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Responses::Response).text().null())
                    .col(ColumnDef::new(Responses::Score).integer().null())
                    .col(ColumnDef::new(Responses::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Responses::Table, Responses::AssessmentId)
                            .to(Assessments::Table, Assessments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Responses::Table, Responses::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Tabela de premiações
        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Awards::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Awards::Name).string().not_null())
                    .col(ColumnDef::new(Awards::SchoolGradeId).big_integer().null())
                    .col(ColumnDef::new(Awards::TotalPositions).integer().not_null())
                    .col(
                        ColumnDef::new(Awards::UseSchoolGrades)
                            .boolean()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Awards::UseCategories).boolean().not_null())
                    .col(ColumnDef::new(Awards::DeletedAt).big_integer().null())
                    .col(ColumnDef::new(Awards::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Awards::Table, Awards::SchoolGradeId)
                            .to(SchoolGrades::Table, SchoolGrades::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Vínculo premiação-pergunta com peso
        manager
            .create_table(
                Table::create()
                    .table(AwardQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AwardQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AwardQuestions::AwardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AwardQuestions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AwardQuestions::Weight).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AwardQuestions::Table, AwardQuestions::AwardId)
                            .to(Awards::Table, Awards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AwardQuestions::Table, AwardQuestions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AwardQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Responses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluatorCategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluators::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProjectStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SchoolGrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    PasswordHash,
    Role,
    Status,
    DisplayName,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SchoolGrades {
    #[sea_orm(iden = "school_grades")]
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Schools {
    #[sea_orm(iden = "schools")]
    Table,
    Id,
    Name,
    City,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    Name,
    SchoolId,
    SchoolGradeId,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Categories {
    #[sea_orm(iden = "categories")]
    Table,
    Id,
    Name,
    MainCategoryId,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    #[sea_orm(iden = "projects")]
    Table,
    Id,
    Title,
    Year,
    CategoryId,
    ProjectType,
    ExternalId,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectStudents {
    #[sea_orm(iden = "project_students")]
    Table,
    Id,
    ProjectId,
    StudentId,
}

#[derive(DeriveIden)]
enum Evaluators {
    #[sea_orm(iden = "evaluators")]
    Table,
    Id,
    UserId,
    Pin,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EvaluatorCategories {
    #[sea_orm(iden = "evaluator_categories")]
    Table,
    Id,
    EvaluatorId,
    CategoryId,
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    EvaluatorId,
    ProjectId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    ScientificText,
    TechnologicalText,
    QuestionType,
    NumberAlternatives,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Responses {
    #[sea_orm(iden = "responses")]
    Table,
    Id,
    AssessmentId,
    QuestionId,
    Response,
    Score,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Awards {
    #[sea_orm(iden = "awards")]
    Table,
    Id,
    Name,
    SchoolGradeId,
    TotalPositions,
    UseSchoolGrades,
    UseCategories,
    DeletedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AwardQuestions {
    #[sea_orm(iden = "award_questions")]
    Table,
    Id,
    AwardId,
    QuestionId,
    Weight,
}
