//! Agregador de notas
//!
//! Funções puras sobre as linhas de nota de um trabalho (respostas de
//! múltipla escolha já filtradas pelo storage). A média simples vira a
//! "nota final" do painel; a soma ponderada pelas perguntas do prêmio vira
//! a nota de ranking.

use std::collections::HashMap;

use crate::models::awards::entities::AwardQuestion;
use crate::models::responses::entities::ScoreRow;

/// Média aritmética de todas as notas do trabalho. `None` enquanto não
/// houver nenhuma resposta de múltipla escolha: trabalho sem avaliação não
/// tem nota, o que é diferente de nota zero.
pub fn final_note(rows: &[ScoreRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: i64 = rows.iter().map(|r| r.score as i64).sum();
    Some(sum as f64 / rows.len() as f64)
}

/// Média restrita a uma pergunta (filtro "por pergunta" do relatório de
/// premiação)
pub fn note_by_question(rows: &[ScoreRow], question_id: i64) -> Option<f64> {
    let filtered: Vec<ScoreRow> = rows
        .iter()
        .filter(|r| r.question_id == question_id)
        .cloned()
        .collect();
    final_note(&filtered)
}

/// Nota de ranking do prêmio: soma, sobre as perguntas do prêmio, da média
/// da pergunta multiplicada pelo peso. Pergunta sem resposta contribui com
/// zero aqui (ao contrário da nota final, que fica nula).
pub fn award_score(rows: &[ScoreRow], questions: &[AwardQuestion]) -> f64 {
    questions
        .iter()
        .map(|q| {
            let mean = note_by_question(rows, q.question_id).unwrap_or(0.0);
            mean * q.weight as f64
        })
        .sum()
}

/// Agrupa as linhas de nota por trabalho
pub fn scores_by_project(rows: Vec<ScoreRow>) -> HashMap<i64, Vec<ScoreRow>> {
    let mut by_project: HashMap<i64, Vec<ScoreRow>> = HashMap::new();
    for row in rows {
        by_project.entry(row.project_id).or_default().push(row);
    }
    by_project
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(project_id: i64, question_id: i64, score: i32) -> ScoreRow {
        ScoreRow {
            project_id,
            question_id,
            score,
        }
    }

    #[test]
    fn test_final_note_is_null_without_responses() {
        assert_eq!(final_note(&[]), None);
    }

    #[test]
    fn test_final_note_is_mean_of_scores() {
        let rows = vec![row(1, 1, 8), row(1, 1, 6), row(1, 2, 10)];
        assert_eq!(final_note(&rows), Some(8.0));
    }

    #[test]
    fn test_note_by_question_restricts_to_question() {
        let rows = vec![row(1, 1, 8), row(1, 1, 6), row(1, 2, 10)];
        assert_eq!(note_by_question(&rows, 1), Some(7.0));
        assert_eq!(note_by_question(&rows, 2), Some(10.0));
        assert_eq!(note_by_question(&rows, 3), None);
    }

    #[test]
    fn test_award_score_weighted_sum() {
        // Trabalho X: média q1 = 8, média q2 = 6; pesos 2 e 1 -> 22
        let x = vec![row(1, 1, 8), row(1, 2, 6)];
        // Trabalho Y: média q1 = 5, média q2 = 10 -> 20
        let y = vec![row(2, 1, 5), row(2, 2, 10)];
        let questions = vec![
            AwardQuestion {
                question_id: 1,
                weight: 2,
            },
            AwardQuestion {
                question_id: 2,
                weight: 1,
            },
        ];
        assert_eq!(award_score(&x, &questions), 22.0);
        assert_eq!(award_score(&y, &questions), 20.0);
    }

    #[test]
    fn test_award_score_missing_question_counts_as_zero() {
        let rows = vec![row(1, 1, 8)];
        let questions = vec![
            AwardQuestion {
                question_id: 1,
                weight: 2,
            },
            AwardQuestion {
                question_id: 9,
                weight: 5,
            },
        ];
        assert_eq!(award_score(&rows, &questions), 16.0);
    }

    #[test]
    fn test_award_score_without_responses_is_zero() {
        let questions = vec![AwardQuestion {
            question_id: 1,
            weight: 3,
        }];
        assert_eq!(award_score(&[], &questions), 0.0);
    }

    #[test]
    fn test_scores_by_project_groups_rows() {
        let rows = vec![row(1, 1, 8), row(2, 1, 5), row(1, 2, 6)];
        let grouped = scores_by_project(rows);
        assert_eq!(grouped.get(&1).map(|v| v.len()), Some(2));
        assert_eq!(grouped.get(&2).map(|v| v.len()), Some(1));
    }
}
