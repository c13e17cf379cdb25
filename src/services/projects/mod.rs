pub mod create;
pub mod delete;
pub mod detail;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::projects::requests::{CreateProjectRequest, ProjectListQuery};
use crate::storage::Storage;

pub struct ProjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // Cria trabalho
    pub async fn create_project(
        &self,
        create_request: CreateProjectRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_project(self, create_request, request).await
    }

    // Lista trabalhos do ano com paginação
    pub async fn list_projects(
        &self,
        query: ProjectListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_projects(self, query, request).await
    }

    // Detalhe do trabalho com a nota final agregada
    pub async fn get_project(
        &self,
        project_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_project(self, project_id, request).await
    }

    // Soft delete do trabalho
    pub async fn delete_project(
        &self,
        project_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_project(self, project_id, request).await
    }
}
