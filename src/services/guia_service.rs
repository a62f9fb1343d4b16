// src/services/guia_service.rs
use crate::{
    error::{AppError, AppResult},
    models::guia::{encode_json, CamposGuia, GuiaEnsino, GuiaEnsinoRow},
};
use serde_json::{Map, Value};
use sqlx::SqlitePool;

const NOT_FOUND: &str = "Registro não encontrado";

const GUIA_COLUMNS: &str = "id, nome_professor, ano_turma, componente_curricular, mes_bimestre, \
    breve_justificativa, conteudos, habilidades_cognitivas, situacoes_didaticas, atividades, \
    praticas_educativas, espacos_educativos, recursos_didaticos, estrategias_avaliacao, \
    fonte_referencia";

pub async fn create(db_pool: &SqlitePool, campos: &CamposGuia) -> AppResult<GuiaEnsino> {
    tracing::debug!("Criando guia de ensino para {:?}", campos.nome_professor);
    let sql = format!(
        r#"
        INSERT INTO guia_ensino (
            nome_professor, ano_turma, componente_curricular, mes_bimestre,
            breve_justificativa, conteudos, habilidades_cognitivas, situacoes_didaticas,
            atividades, praticas_educativas, espacos_educativos, recursos_didaticos,
            estrategias_avaliacao, fonte_referencia
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
        RETURNING {}
        "#,
        GUIA_COLUMNS
    );
    let row = sqlx::query_as::<_, GuiaEnsinoRow>(&sql)
        .bind(&campos.nome_professor)
        .bind(&campos.ano_turma)
        .bind(&campos.componente_curricular)
        .bind(&campos.mes_bimestre)
        .bind(&campos.breve_justificativa)
        .bind(&campos.conteudos)
        .bind(&campos.habilidades_cognitivas)
        .bind(encode_json(&campos.situacoes_didaticas)?)
        .bind(encode_json(&campos.atividades)?)
        .bind(&campos.praticas_educativas)
        .bind(&campos.espacos_educativos)
        .bind(&campos.recursos_didaticos)
        .bind(&campos.estrategias_avaliacao)
        .bind(&campos.fonte_referencia)
        .fetch_one(db_pool)
        .await?;

    let guia = GuiaEnsino::try_from(row)?;
    tracing::info!("✅ Guia de ensino {} criado.", guia.id);
    Ok(guia)
}

pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<GuiaEnsino>> {
    let sql = format!("SELECT {} FROM guia_ensino ORDER BY id ASC", GUIA_COLUMNS);
    let rows = sqlx::query_as::<_, GuiaEnsinoRow>(&sql).fetch_all(db_pool).await?;
    tracing::debug!("Encontrados {} guias.", rows.len());
    rows.into_iter().map(GuiaEnsino::try_from).collect()
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<GuiaEnsino>> {
    let sql = format!("SELECT {} FROM guia_ensino WHERE id = ?1", GUIA_COLUMNS);
    sqlx::query_as::<_, GuiaEnsinoRow>(&sql)
        .bind(id)
        .fetch_optional(db_pool)
        .await?
        .map(GuiaEnsino::try_from)
        .transpose()
}

/// Aplica as chaves presentes em `patch` sobre o registo guardado.
/// Chaves ausentes mantêm o valor; `null` explícito limpa o campo.
pub async fn update(db_pool: &SqlitePool, id: i64, patch: Map<String, Value>) -> AppResult<GuiaEnsino> {
    let atual = find_by_id(db_pool, id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;

    let campos = merge(&atual.campos, patch)?;

    let sql = format!(
        r#"
        UPDATE guia_ensino SET
            nome_professor = ?1, ano_turma = ?2, componente_curricular = ?3, mes_bimestre = ?4,
            breve_justificativa = ?5, conteudos = ?6, habilidades_cognitivas = ?7,
            situacoes_didaticas = ?8, atividades = ?9, praticas_educativas = ?10,
            espacos_educativos = ?11, recursos_didaticos = ?12, estrategias_avaliacao = ?13,
            fonte_referencia = ?14
        WHERE id = ?15
        RETURNING {}
        "#,
        GUIA_COLUMNS
    );
    let row = sqlx::query_as::<_, GuiaEnsinoRow>(&sql)
        .bind(&campos.nome_professor)
        .bind(&campos.ano_turma)
        .bind(&campos.componente_curricular)
        .bind(&campos.mes_bimestre)
        .bind(&campos.breve_justificativa)
        .bind(&campos.conteudos)
        .bind(&campos.habilidades_cognitivas)
        .bind(encode_json(&campos.situacoes_didaticas)?)
        .bind(encode_json(&campos.atividades)?)
        .bind(&campos.praticas_educativas)
        .bind(&campos.espacos_educativos)
        .bind(&campos.recursos_didaticos)
        .bind(&campos.estrategias_avaliacao)
        .bind(&campos.fonte_referencia)
        .bind(id)
        .fetch_optional(db_pool)
        .await?;

    // Pode ter sido apagado entre a leitura e a escrita
    let row = row.ok_or(AppError::NotFound(NOT_FOUND))?;
    tracing::info!("✅ Guia de ensino {} atualizado.", id);
    GuiaEnsino::try_from(row)
}

fn merge(atual: &CamposGuia, patch: Map<String, Value>) -> AppResult<CamposGuia> {
    let mut merged = match serde_json::to_value(atual) {
        Ok(Value::Object(map)) => map,
        _ => return Err(AppError::InternalServerError),
    };
    for (key, value) in patch {
        if merged.contains_key(&key) {
            merged.insert(key, value);
        }
    }
    serde_json::from_value(Value::Object(merged)).map_err(|e| AppError::Validation(e.to_string()))
}

pub async fn delete_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<bool> {
    let rows_affected = sqlx::query("DELETE FROM guia_ensino WHERE id = ?1")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();
    if rows_affected > 0 {
        tracing::info!("🗑️ Guia de ensino {} removido.", id);
    }
    Ok(rows_affected > 0)
}

pub fn not_found() -> AppError {
    AppError::NotFound(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_db_pool;
    use serde_json::json;

    async fn setup_test_db() -> SqlitePool {
        create_db_pool("sqlite::memory:")
            .await
            .expect("Failed to initialize test database")
    }

    fn exemplo() -> CamposGuia {
        CamposGuia {
            nome_professor: Some("Ana".into()),
            ano_turma: Some("5º ano".into()),
            componente_curricular: Some("Matemática".into()),
            mes_bimestre: Some("1º bimestre".into()),
            conteudos: Some("Frações".into()),
            situacoes_didaticas: Some(json!([{ "titulo": "Roda de conversa", "duracao": 2 }])),
            atividades: Some(json!(["lista 1", "lista 2"])),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn create_then_fetch_returns_same_fields() {
        let pool = setup_test_db().await;
        let criado = create(&pool, &exemplo()).await.unwrap();

        let lido = find_by_id(&pool, criado.id).await.unwrap().unwrap();
        assert_eq!(lido, criado);
        assert_eq!(lido.campos, exemplo());
    }

    #[tokio::test]
    async fn empty_record_is_accepted() {
        let pool = setup_test_db().await;
        let criado = create(&pool, &CamposGuia::default()).await.unwrap();
        assert_eq!(criado.campos, CamposGuia::default());
        assert_eq!(find_all(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_merges_present_keys_only() {
        let pool = setup_test_db().await;
        let criado = create(&pool, &exemplo()).await.unwrap();

        let patch = json!({ "conteudos": "Decimais", "atividades": null, "id": 99, "extra": 1 });
        let Value::Object(patch) = patch else { unreachable!() };
        let atualizado = update(&pool, criado.id, patch).await.unwrap();

        assert_eq!(atualizado.id, criado.id);
        assert_eq!(atualizado.campos.conteudos.as_deref(), Some("Decimais"));
        assert_eq!(atualizado.campos.atividades, None);
        assert_eq!(atualizado.campos.nome_professor.as_deref(), Some("Ana"));
        assert_eq!(atualizado.campos.situacoes_didaticas, exemplo().situacoes_didaticas);
    }

    #[tokio::test]
    async fn update_with_wrong_type_is_validation_error() {
        let pool = setup_test_db().await;
        let criado = create(&pool, &exemplo()).await.unwrap();

        let Value::Object(patch) = json!({ "conteudos": 5 }) else { unreachable!() };
        let err = update(&pool, criado.id, patch).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn update_and_delete_missing_record() {
        let pool = setup_test_db().await;
        let err = update(&pool, 7, Map::new()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!delete_by_id(&pool, 7).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let pool = setup_test_db().await;
        let criado = create(&pool, &exemplo()).await.unwrap();
        assert!(delete_by_id(&pool, criado.id).await.unwrap());
        assert!(find_by_id(&pool, criado.id).await.unwrap().is_none());
    }
}
