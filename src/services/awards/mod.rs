pub mod list;
pub mod ranking;
pub mod report;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::awards::requests::AwardReportQuery;
use crate::storage::Storage;

pub struct AwardService {
    storage: Option<Arc<dyn Storage>>,
}

impl AwardService {
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

    // Lista as premiações cadastradas
    pub async fn list_awards(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_awards(self, request).await
    }

    // Relatório de vencedores de uma premiação
    pub async fn get_report(
        &self,
        award_id: i64,
        query: AwardReportQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::handle_get_report(self, award_id, query, request).await
    }
}
