// Completude de um trabalho: quantas avaliações existem e quantas já têm
// ao menos uma resposta. Insumo do classificador de andamento.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCompletion {
    pub project_id: i64,
    pub total_assessments: i64,
    pub completed_assessments: i64,
}
