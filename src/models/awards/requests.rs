use serde::Deserialize;
use ts_rs::TS;

// Filtros do relatório de premiação
//
// school_grade e category restringem as células exibidas; question troca a
// nota exibida pela média daquela pergunta (só exibição, a seleção dos
// vencedores não muda).
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../web/src/types/generated/award.ts")]
pub struct AwardReportQuery {
    /// Ano da edição; quando ausente usa o ano padrão configurado
    pub year: Option<i32>,
    pub school_grade: Option<i64>,
    pub category: Option<i64>,
    pub question: Option<i64>,
}
