//! Classificador de andamento e agregados do painel

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::dashboard::{
    entities::ProjectCompletion,
    requests::DashboardStatsQuery,
    responses::{DashboardStatsResponse, StatusAvaliacoes},
};
use crate::models::{ApiResponse, ErrorCode};

use super::DashboardService;

/// Situação de um trabalho quanto às avaliações
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBucket {
    /// Sem nenhum avaliador atribuído
    Unassigned,
    /// Nenhuma avaliação respondida ainda
    Pending,
    /// Faltam `k` avaliações (0 < respondidas < total)
    Missing(i64),
    /// Todas as avaliações respondidas
    Evaluated,
}

/// Classifica a completude de um trabalho em exatamente um balde
pub fn classify(completion: &ProjectCompletion) -> CompletionBucket {
    let total = completion.total_assessments;
    let completed = completion.completed_assessments;

    if total == 0 {
        CompletionBucket::Unassigned
    } else if completed == 0 {
        CompletionBucket::Pending
    } else if completed < total {
        CompletionBucket::Missing(total - completed)
    } else {
        CompletionBucket::Evaluated
    }
}

fn percentage(part: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    (100.0 * part as f64 / total as f64).round() as i64
}

/// Agrega a completude de todos os trabalhos do ano nos números do painel
pub fn aggregate(
    completions: &[ProjectCompletion],
    active_evaluators: i64,
) -> DashboardStatsResponse {
    let total_projetos = completions.len() as i64;
    let mut trabalhos_para_avaliar = 0;
    let mut trabalhos_avaliados = 0;
    let mut fully_evaluated = 0;
    let mut status = StatusAvaliacoes::default();

    for completion in completions {
        if completion.completed_assessments >= 1 {
            trabalhos_avaliados += 1;
        }
        match classify(completion) {
            CompletionBucket::Unassigned => {}
            CompletionBucket::Pending => trabalhos_para_avaliar += 1,
            CompletionBucket::Missing(1) => status.faltam_1_avaliacao += 1,
            CompletionBucket::Missing(2) => status.faltam_2_avaliacoes += 1,
            CompletionBucket::Missing(3) => status.faltam_3_avaliacoes += 1,
            CompletionBucket::Missing(_) => {}
            CompletionBucket::Evaluated => fully_evaluated += 1,
        }
    }

    DashboardStatsResponse {
        total_projetos,
        trabalhos_para_avaliar,
        trabalhos_avaliados,
        avaliadores_ativos: active_evaluators,
        progresso_geral_inicial: percentage(trabalhos_avaliados, total_projetos),
        progresso_geral: percentage(fully_evaluated, total_projetos),
        status_avaliacoes: status,
    }
}

pub async fn handle_get_stats(
    service: &DashboardService,
    query: DashboardStatsQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let year = query.year.unwrap_or(config.event.default_year);

    let completions = match storage.list_project_completion(year).await {
        Ok(completions) => completions,
        Err(e) => {
            tracing::error!("Failed to load project completion for year {}: {}", year, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao calcular os números do painel",
                )),
            );
        }
    };

    let active_evaluators = match storage.count_active_evaluators(year).await {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("Failed to count active evaluators for year {}: {}", year, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao calcular os números do painel",
                )),
            );
        }
    };

    let response = aggregate(&completions, active_evaluators);
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Painel calculado")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completion(project_id: i64, total: i64, completed: i64) -> ProjectCompletion {
        ProjectCompletion {
            project_id,
            total_assessments: total,
            completed_assessments: completed,
        }
    }

    #[test]
    fn test_classify_buckets() {
        assert_eq!(classify(&completion(1, 0, 0)), CompletionBucket::Unassigned);
        assert_eq!(classify(&completion(2, 3, 0)), CompletionBucket::Pending);
        assert_eq!(classify(&completion(3, 3, 2)), CompletionBucket::Missing(1));
        assert_eq!(classify(&completion(4, 3, 1)), CompletionBucket::Missing(2));
        assert_eq!(classify(&completion(5, 3, 3)), CompletionBucket::Evaluated);
    }

    #[test]
    fn test_classify_tolerates_more_than_three_assessments() {
        assert_eq!(classify(&completion(1, 5, 2)), CompletionBucket::Missing(3));
        assert_eq!(classify(&completion(2, 5, 5)), CompletionBucket::Evaluated);
    }

    #[test]
    fn test_aggregate_empty_scope_is_all_zero() {
        let stats = aggregate(&[], 0);
        assert_eq!(stats.total_projetos, 0);
        assert_eq!(stats.progresso_geral_inicial, 0);
        assert_eq!(stats.progresso_geral, 0);
    }

    #[test]
    fn test_aggregate_counts_and_percentages() {
        // 4 trabalhos: completo, 2 de 3, pendente, sem avaliador
        let completions = vec![
            completion(1, 3, 3),
            completion(2, 3, 2),
            completion(3, 3, 0),
            completion(4, 0, 0),
        ];
        let stats = aggregate(&completions, 5);

        assert_eq!(stats.total_projetos, 4);
        assert_eq!(stats.trabalhos_para_avaliar, 1);
        assert_eq!(stats.trabalhos_avaliados, 2);
        assert_eq!(stats.avaliadores_ativos, 5);
        assert_eq!(stats.status_avaliacoes.faltam_1_avaliacao, 1);
        assert_eq!(stats.status_avaliacoes.faltam_2_avaliacoes, 0);
        // 2 de 4 com ao menos uma resposta; 1 de 4 completo
        assert_eq!(stats.progresso_geral_inicial, 50);
        assert_eq!(stats.progresso_geral, 25);
        assert!(stats.progresso_geral <= stats.progresso_geral_inicial);
    }

    #[test]
    fn test_partially_evaluated_project_counts_as_avaliado() {
        // 2 de 3 respondidas: conta em trabalhos_avaliados e em faltam_1,
        // mas não no progresso_geral
        let completions = vec![completion(1, 3, 2)];
        let stats = aggregate(&completions, 3);
        assert_eq!(stats.trabalhos_avaliados, 1);
        assert_eq!(stats.status_avaliacoes.faltam_1_avaliacao, 1);
        assert_eq!(stats.progresso_geral, 0);
        assert_eq!(stats.progresso_geral_inicial, 100);
    }
}
