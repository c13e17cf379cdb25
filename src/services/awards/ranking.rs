//! Resolutor de ranking de premiação
//!
//! Expande a grade de partições do prêmio (grau de ensino × categoria
//! principal, conforme as flags) e, célula a célula, colocação a colocação,
//! escolhe o trabalho de maior nota ainda não premiado. A exclusividade é
//! global no prêmio: um trabalho nunca vence duas colocações, mesmo em
//! células diferentes.

use std::collections::{HashMap, HashSet};

use crate::models::awards::entities::{Award, RankingCandidate, SchoolGrade};
use crate::models::categories::entities::Category;
use crate::models::responses::entities::ScoreRow;
use crate::services::scoring;

/// Vencedor de uma colocação
#[derive(Debug, Clone, PartialEq)]
pub struct RankedWinner {
    pub project_id: i64,
    pub external_id: String,
    pub title: String,
    pub score: f64,
}

/// Uma linha do ranking resolvido: colocação, célula e o vencedor (nenhum
/// quando a célula esgotou os candidatos)
#[derive(Debug, Clone)]
pub struct WinnerRow {
    pub position: i32,
    pub school_grade: Option<SchoolGrade>,
    pub category: Option<Category>,
    pub winner: Option<RankedWinner>,
}

fn matches_cell(
    candidate: &RankingCandidate,
    grade: Option<&SchoolGrade>,
    category: Option<&Category>,
) -> bool {
    if let Some(grade) = grade
        && !candidate.school_grade_ids.contains(&grade.id)
    {
        return false;
    }
    if let Some(category) = category
        && candidate.main_category_id != category.id
    {
        return false;
    }
    true
}

/// Resolve o ranking completo do prêmio.
///
/// `scores` são as linhas de nota do ano agrupadas por trabalho; trabalho
/// sem nota concorre com nota zero. Empate é decidido pelo menor id de
/// trabalho.
pub fn resolve(
    award: &Award,
    candidates: &[RankingCandidate],
    scores: &HashMap<i64, Vec<ScoreRow>>,
    school_grades: &[SchoolGrade],
    categories: &[Category],
) -> Vec<WinnerRow> {
    // Nota de ranking de cada candidato, calculada uma única vez
    let ranking_scores: HashMap<i64, f64> = candidates
        .iter()
        .map(|c| {
            let rows = scores.get(&c.project_id).map(Vec::as_slice).unwrap_or(&[]);
            (c.project_id, scoring::award_score(rows, &award.questions))
        })
        .collect();

    // Grade de células conforme as flags do prêmio
    let grade_axis: Vec<Option<&SchoolGrade>> = if award.use_school_grades {
        school_grades.iter().map(Some).collect()
    } else {
        vec![None]
    };
    let category_axis: Vec<Option<&Category>> = if award.use_categories {
        categories.iter().map(Some).collect()
    } else {
        vec![None]
    };

    let mut consumed: HashSet<i64> = HashSet::new();
    let mut rows = Vec::new();

    for grade in &grade_axis {
        for category in &category_axis {
            for position in 1..=award.total_positions {
                let winner = candidates
                    .iter()
                    .filter(|c| !consumed.contains(&c.project_id))
                    .filter(|c| matches_cell(c, *grade, *category))
                    .min_by(|a, b| {
                        let score_a = ranking_scores[&a.project_id];
                        let score_b = ranking_scores[&b.project_id];
                        // maior nota primeiro; empate vai para o menor id
                        score_b
                            .partial_cmp(&score_a)
                            .unwrap_or(std::cmp::Ordering::Equal)
                            .then(a.project_id.cmp(&b.project_id))
                    });

                let winner = winner.map(|c| {
                    consumed.insert(c.project_id);
                    RankedWinner {
                        project_id: c.project_id,
                        external_id: c.external_id.clone(),
                        title: c.title.clone(),
                        score: ranking_scores[&c.project_id],
                    }
                });

                rows.push(WinnerRow {
                    position,
                    school_grade: grade.map(|g| g.clone()),
                    category: category.map(|c| c.clone()),
                    winner,
                });
            }
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::awards::entities::AwardQuestion;

    fn award(total_positions: i32, use_school_grades: bool, use_categories: bool) -> Award {
        Award {
            id: 1,
            name: "Destaque".to_string(),
            school_grade_id: None,
            total_positions,
            use_school_grades,
            use_categories,
            questions: vec![
                AwardQuestion {
                    question_id: 1,
                    weight: 2,
                },
                AwardQuestion {
                    question_id: 2,
                    weight: 1,
                },
            ],
        }
    }

    fn candidate(
        project_id: i64,
        main_category_id: i64,
        school_grade_ids: Vec<i64>,
    ) -> RankingCandidate {
        RankingCandidate {
            project_id,
            external_id: format!("EXT-{project_id:03}"),
            title: format!("Trabalho {project_id}"),
            main_category_id,
            school_grade_ids,
        }
    }

    fn rows_for(project_id: i64, q1: i32, q2: i32) -> Vec<ScoreRow> {
        vec![
            ScoreRow {
                project_id,
                question_id: 1,
                score: q1,
            },
            ScoreRow {
                project_id,
                question_id: 2,
                score: q2,
            },
        ]
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            main_category_id: None,
        }
    }

    #[test]
    fn test_highest_weighted_score_wins() {
        // X: 8*2 + 6*1 = 22; Y: 5*2 + 10*1 = 20
        let award = award(1, false, true);
        let candidates = vec![candidate(1, 10, vec![]), candidate(2, 10, vec![])];
        let mut scores = HashMap::new();
        scores.insert(1, rows_for(1, 8, 6));
        scores.insert(2, rows_for(2, 5, 10));
        let categories = vec![category(10, "Exatas")];

        let rows = resolve(&award, &candidates, &scores, &[], &categories);
        assert_eq!(rows.len(), 1);
        let winner = rows[0].winner.as_ref().unwrap();
        assert_eq!(winner.project_id, 1);
        assert_eq!(winner.score, 22.0);
    }

    #[test]
    fn test_tie_break_lowest_project_id() {
        let award = award(2, false, false);
        let candidates = vec![candidate(7, 10, vec![]), candidate(3, 10, vec![])];
        let mut scores = HashMap::new();
        scores.insert(7, rows_for(7, 5, 5));
        scores.insert(3, rows_for(3, 5, 5));

        let rows = resolve(&award, &candidates, &scores, &[], &[]);
        assert_eq!(rows[0].winner.as_ref().unwrap().project_id, 3);
        assert_eq!(rows[1].winner.as_ref().unwrap().project_id, 7);
    }

    #[test]
    fn test_project_wins_at_most_once_per_award() {
        // Mesmo trabalho elegível em duas células (dois graus de ensino):
        // só pode vencer em uma
        let award = award(1, true, false);
        let candidates = vec![candidate(1, 10, vec![100, 200])];
        let mut scores = HashMap::new();
        scores.insert(1, rows_for(1, 9, 9));
        let grades = vec![
            SchoolGrade {
                id: 100,
                name: "Fundamental".to_string(),
            },
            SchoolGrade {
                id: 200,
                name: "Médio".to_string(),
            },
        ];

        let rows = resolve(&award, &candidates, &scores, &grades, &[]);
        let winners: Vec<_> = rows.iter().filter_map(|r| r.winner.as_ref()).collect();
        assert_eq!(winners.len(), 1);
    }

    #[test]
    fn test_exhausted_cell_emits_empty_rows() {
        let award = award(3, false, false);
        let candidates = vec![candidate(1, 10, vec![])];
        let mut scores = HashMap::new();
        scores.insert(1, rows_for(1, 7, 7));

        let rows = resolve(&award, &candidates, &scores, &[], &[]);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].winner.is_some());
        assert!(rows[1].winner.is_none());
        assert!(rows[2].winner.is_none());
        assert_eq!(rows[2].position, 3);
    }

    #[test]
    fn test_category_partition_restricts_candidates() {
        let award = award(1, false, true);
        let candidates = vec![candidate(1, 10, vec![]), candidate(2, 20, vec![])];
        let mut scores = HashMap::new();
        scores.insert(1, rows_for(1, 2, 2));
        scores.insert(2, rows_for(2, 9, 9));
        let categories = vec![category(10, "Exatas"), category(20, "Humanas")];

        let rows = resolve(&award, &candidates, &scores, &[], &categories);
        assert_eq!(rows.len(), 2);
        // Cada célula só enxerga os trabalhos da própria categoria
        assert_eq!(rows[0].winner.as_ref().unwrap().project_id, 1);
        assert_eq!(rows[1].winner.as_ref().unwrap().project_id, 2);
    }

    #[test]
    fn test_candidate_without_responses_scores_zero_but_can_win() {
        let award = award(1, false, false);
        let candidates = vec![candidate(1, 10, vec![])];
        let scores = HashMap::new();

        let rows = resolve(&award, &candidates, &scores, &[], &[]);
        let winner = rows[0].winner.as_ref().unwrap();
        assert_eq!(winner.score, 0.0);
    }
}
