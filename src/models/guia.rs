// src/models/guia.rs
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Campos editáveis de um guia de ensino. Nenhum é obrigatório.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CamposGuia {
    pub nome_professor: Option<String>,
    pub ano_turma: Option<String>,
    pub componente_curricular: Option<String>,
    pub mes_bimestre: Option<String>,
    pub breve_justificativa: Option<String>,
    pub conteudos: Option<String>,
    pub habilidades_cognitivas: Option<String>,
    pub situacoes_didaticas: Option<Value>,
    pub atividades: Option<Value>,
    pub praticas_educativas: Option<String>,
    pub espacos_educativos: Option<String>,
    pub recursos_didaticos: Option<String>,
    pub estrategias_avaliacao: Option<String>,
    pub fonte_referencia: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuiaEnsino {
    pub id: i64,
    #[serde(flatten)]
    pub campos: CamposGuia,
}

// Linha crua da tabela; as colunas JSON vêm como texto
#[derive(Debug, FromRow)]
pub struct GuiaEnsinoRow {
    pub id: i64,
    pub nome_professor: Option<String>,
    pub ano_turma: Option<String>,
    pub componente_curricular: Option<String>,
    pub mes_bimestre: Option<String>,
    pub breve_justificativa: Option<String>,
    pub conteudos: Option<String>,
    pub habilidades_cognitivas: Option<String>,
    pub situacoes_didaticas: Option<String>,
    pub atividades: Option<String>,
    pub praticas_educativas: Option<String>,
    pub espacos_educativos: Option<String>,
    pub recursos_didaticos: Option<String>,
    pub estrategias_avaliacao: Option<String>,
    pub fonte_referencia: Option<String>,
}

impl TryFrom<GuiaEnsinoRow> for GuiaEnsino {
    type Error = AppError;

    fn try_from(row: GuiaEnsinoRow) -> AppResult<Self> {
        Ok(GuiaEnsino {
            id: row.id,
            campos: CamposGuia {
                nome_professor: row.nome_professor,
                ano_turma: row.ano_turma,
                componente_curricular: row.componente_curricular,
                mes_bimestre: row.mes_bimestre,
                breve_justificativa: row.breve_justificativa,
                conteudos: row.conteudos,
                habilidades_cognitivas: row.habilidades_cognitivas,
                situacoes_didaticas: decode_json(row.situacoes_didaticas)?,
                atividades: decode_json(row.atividades)?,
                praticas_educativas: row.praticas_educativas,
                espacos_educativos: row.espacos_educativos,
                recursos_didaticos: row.recursos_didaticos,
                estrategias_avaliacao: row.estrategias_avaliacao,
                fonte_referencia: row.fonte_referencia,
            },
        })
    }
}

fn decode_json(raw: Option<String>) -> AppResult<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("JSON corrompido na tabela guia_ensino: {:?}", e);
            AppError::InternalServerError
        })
    })
    .transpose()
}

/// Serializa um valor JSON para gravar numa coluna TEXT.
pub fn encode_json(value: &Option<Value>) -> AppResult<Option<String>> {
    value
        .as_ref()
        .map(|v| {
            serde_json::to_string(v).map_err(|e| {
                tracing::error!("Falha ao serializar JSON: {:?}", e);
                AppError::InternalServerError
            })
        })
        .transpose()
}
