pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluators::requests::CreateEvaluatorRequest;
use crate::storage::Storage;

pub struct EvaluatorService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluatorService {
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

    // Cria avaliador com usuário vinculado, PIN sorteado e avaliações
    pub async fn create_evaluator(
        &self,
        create_request: CreateEvaluatorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_evaluator(self, create_request, request).await
    }

    // Lista avaliadores
    pub async fn list_evaluators(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_evaluators(self, request).await
    }
}
