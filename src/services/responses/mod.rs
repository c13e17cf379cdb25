pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::responses::requests::SubmitResponsesRequest;
use crate::storage::Storage;

pub struct ResponseService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResponseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // Substitui todas as respostas da avaliação pelo questionário enviado
    pub async fn submit_responses(
        &self,
        request: &HttpRequest,
        payload: web::Json<SubmitResponsesRequest>,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_responses(self, request, payload.into_inner()).await
    }
}
