use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Categoria (principal quando main_category_id é nulo)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/category.ts")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub main_category_id: Option<i64>,
}

impl Category {
    pub fn is_main(&self) -> bool {
        self.main_category_id.is_none()
    }
}
