use serde::{Deserialize, Serialize};
use ts_rs::TS;

// Grau de ensino (Ensino Fundamental, Médio, Superior...)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct SchoolGrade {
    pub id: i64,
    pub name: String,
}

// Pergunta que compõe a nota da premiação, com o peso do vínculo
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct AwardQuestion {
    pub question_id: i64,
    pub weight: i32,
}

// Premiação
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct Award {
    pub id: i64,
    pub name: String,
    /// Apenas rótulo; o particionamento usa use_school_grades
    pub school_grade_id: Option<i64>,
    /// Quantidade de colocações (ex.: top-3)
    pub total_positions: i32,
    /// Divide o ranking por grau de ensino
    pub use_school_grades: bool,
    /// Divide o ranking por categoria principal
    pub use_categories: bool,
    pub questions: Vec<AwardQuestion>,
}

/// Trabalho candidato ao ranking, com os vínculos necessários para o
/// particionamento por grau/categoria
#[derive(Debug, Clone)]
pub struct RankingCandidate {
    pub project_id: i64,
    pub external_id: String,
    pub title: String,
    /// Categoria principal do trabalho (a própria categoria quando ela já é
    /// principal, senão a mãe da subcategoria)
    pub main_category_id: i64,
    /// Graus de ensino dos estudantes autores, sem repetição
    pub school_grade_ids: Vec<i64>,
}
