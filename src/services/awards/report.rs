//! Relatório de vencedores
//!
//! Os filtros school_grade e category só restringem as células exibidas; o
//! filtro question troca a nota exibida pela média daquela pergunta. A
//! seleção dos vencedores roda sempre sobre a grade completa, para que o
//! recorte exibido seja consistente com o relatório inteiro.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::awards::{
    requests::AwardReportQuery,
    responses::{AwardReportResponse, AwardReportRow},
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::scoring;

use super::{AwardService, ranking};

pub async fn handle_get_report(
    service: &AwardService,
    award_id: i64,
    query: AwardReportQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();
    let year = query.year.unwrap_or(config.event.default_year);

    let award = match storage.get_award_by_id(award_id).await {
        Ok(Some(award)) => award,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "Premiação não encontrada",
            )));
        }
        Err(e) => {
            tracing::error!("Failed to load award {}: {}", award_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao gerar o relatório",
                )),
            );
        }
    };

    let result = load_report_inputs(&storage, &award, year).await;
    let (candidates, scores, school_grades, categories) = match result {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::error!("Failed to load report inputs for award {}: {}", award_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Falha ao gerar o relatório",
                )),
            );
        }
    };

    let resolved = ranking::resolve(&award, &candidates, &scores, &school_grades, &categories);

    let rows: Vec<AwardReportRow> = resolved
        .into_iter()
        .filter(|row| {
            // Recorte de exibição por grau de ensino e categoria
            if let Some(grade_filter) = query.school_grade
                && row.school_grade.as_ref().map(|g| g.id) != Some(grade_filter)
            {
                return false;
            }
            if let Some(category_filter) = query.category
                && row.category.as_ref().map(|c| c.id) != Some(category_filter)
            {
                return false;
            }
            true
        })
        .map(|row| {
            let score = row.winner.as_ref().and_then(|winner| match query.question {
                // Troca de exibição: média da pergunta escolhida, não a
                // nota ponderada
                Some(question_id) => {
                    let project_rows = scores
                        .get(&winner.project_id)
                        .map(Vec::as_slice)
                        .unwrap_or(&[]);
                    scoring::note_by_question(project_rows, question_id)
                }
                None => Some(winner.score),
            });

            AwardReportRow {
                position: row.position,
                award_name: award.name.clone(),
                school_grade_name: row.school_grade.map(|g| g.name),
                category_name: row.category.map(|c| c.name),
                winning_project_external_id: row.winner.as_ref().map(|w| w.external_id.clone()),
                winning_project_title: row.winner.as_ref().map(|w| w.title.clone()),
                score,
            }
        })
        .collect();

    let response = AwardReportResponse {
        award_id: award.id,
        award_name: award.name.clone(),
        year,
        rows,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Relatório gerado")))
}

type ReportInputs = (
    Vec<crate::models::awards::entities::RankingCandidate>,
    std::collections::HashMap<i64, Vec<crate::models::responses::entities::ScoreRow>>,
    Vec<crate::models::awards::entities::SchoolGrade>,
    Vec<crate::models::categories::entities::Category>,
);

async fn load_report_inputs(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    award: &crate::models::awards::entities::Award,
    year: i32,
) -> crate::errors::Result<ReportInputs> {
    let candidates = storage.list_ranking_candidates(year).await?;
    let scores = scoring::scores_by_project(storage.list_score_rows(year).await?);

    let school_grades = if award.use_school_grades {
        storage.list_school_grades().await?
    } else {
        vec![]
    };
    let categories = if award.use_categories {
        storage.list_main_categories().await?
    } else {
        vec![]
    };

    Ok((candidates, scores, school_grades, categories))
}
