//! Operações de trabalho

use super::SeaOrmStorage;
use crate::entity::project_students::ActiveModel as ProjectStudentActiveModel;
use crate::entity::projects::{ActiveModel, Column, Entity as Projects};
use crate::errors::{Result, SaipruError};
use crate::models::{
    PaginationInfo,
    projects::{
        entities::Project,
        requests::{CreateProjectRequest, ProjectListQuery},
        responses::ProjectListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// Cria trabalho com os estudantes autores
    pub async fn create_project_impl(&self, project: CreateProjectRequest) -> Result<Project> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao abrir transação: {e}")))?;

        let model = ActiveModel {
            title: Set(project.title),
            year: Set(project.year),
            category_id: Set(project.category_id),
            project_type: Set(project.project_type.as_i32()),
            external_id: Set(project.external_id),
            deleted_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model
            .insert(&txn)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao criar trabalho: {e}")))?;

        for student_id in project.student_ids {
            let link = ProjectStudentActiveModel {
                project_id: Set(created.id),
                student_id: Set(student_id),
                ..Default::default()
            };
            link.insert(&txn).await.map_err(|e| {
                SaipruError::database_operation(format!("falha ao vincular estudante: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao confirmar transação: {e}")))?;

        Ok(created.into_project())
    }

    /// Busca trabalho ativo por id
    pub async fn get_project_by_id_impl(&self, id: i64) -> Result<Option<Project>> {
        let result = Projects::find_by_id(id)
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar trabalho: {e}")))?;

        Ok(result.map(|m| m.into_project()))
    }

    /// Lista trabalhos do ano com paginação
    pub async fn list_projects_with_pagination_impl(
        &self,
        year: i32,
        query: ProjectListQuery,
    ) -> Result<ProjectListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(20).clamp(1, 100) as u64;

        let mut select = Projects::find()
            .filter(Column::DeletedAt.is_null())
            .filter(Column::Year.eq(year));

        if let Some(category_id) = query.category_id {
            select = select.filter(Column::CategoryId.eq(category_id));
        }

        if let Some(search) = &query.search {
            let pattern = format!("%{}%", escape_like_pattern(search));
            select = select.filter(Column::Title.like(&pattern));
        }

        select = select.order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao contar trabalhos: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao paginar trabalhos: {e}")))?;

        let projects = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar trabalhos: {e}")))?;

        Ok(ProjectListResponse {
            items: projects.into_iter().map(|m| m.into_project()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// Soft delete: marca o tombstone, as consultas de agregação ignoram
    pub async fn delete_project_impl(&self, id: i64) -> Result<bool> {
        let existing = self.get_project_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            id: Set(id),
            deleted_at: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao remover trabalho: {e}")))?;

        Ok(true)
    }
}
