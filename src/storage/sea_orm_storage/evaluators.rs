//! Operações de avaliador

use super::SeaOrmStorage;
use crate::entity::assessments::ActiveModel as AssessmentActiveModel;
use crate::entity::evaluator_categories::ActiveModel as EvaluatorCategoryActiveModel;
use crate::entity::evaluators::{ActiveModel, Column, Entity as Evaluators};
use crate::entity::users::{ActiveModel as UserActiveModel, Entity as Users};
use crate::errors::{Result, SaipruError};
use crate::models::evaluators::{entities::Evaluator, responses::EvaluatorWithName};
use crate::models::users::entities::NewUser;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Cria o avaliador completo em uma transação: usuário vinculado, PIN,
    /// áreas de atuação e uma avaliação por trabalho selecionado.
    pub async fn create_evaluator_impl(
        &self,
        user: NewUser,
        pin: String,
        category_ids: Vec<i64>,
        project_ids: Vec<i64>,
    ) -> Result<Evaluator> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao abrir transação: {e}")))?;

        let user_model = UserActiveModel {
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            role: Set(user.role.to_string()),
            status: Set("active".to_string()),
            display_name: Set(user.display_name),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created_user = user_model
            .insert(&txn)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao criar usuário: {e}")))?;

        let evaluator_model = ActiveModel {
            user_id: Set(created_user.id),
            pin: Set(pin),
            deleted_at: Set(None),
            created_at: Set(now),
            ..Default::default()
        };

        let created = evaluator_model
            .insert(&txn)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao criar avaliador: {e}")))?;

        for category_id in category_ids {
            let link = EvaluatorCategoryActiveModel {
                evaluator_id: Set(created.id),
                category_id: Set(category_id),
                ..Default::default()
            };
            link.insert(&txn).await.map_err(|e| {
                SaipruError::database_operation(format!("falha ao vincular categoria: {e}"))
            })?;
        }

        // uma avaliação por trabalho selecionado
        for project_id in project_ids {
            let assessment = AssessmentActiveModel {
                evaluator_id: Set(created.id),
                project_id: Set(project_id),
                created_at: Set(now),
                ..Default::default()
            };
            assessment.insert(&txn).await.map_err(|e| {
                SaipruError::database_operation(format!("falha ao criar avaliação: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao confirmar transação: {e}")))?;

        Ok(created.into_evaluator())
    }

    /// Busca avaliador pelo PIN
    pub async fn get_evaluator_by_pin_impl(&self, pin: &str) -> Result<Option<Evaluator>> {
        let result = Evaluators::find()
            .filter(Column::Pin.eq(pin))
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar avaliador: {e}")))?;

        Ok(result.map(|m| m.into_evaluator()))
    }

    /// Busca avaliador pelo usuário vinculado
    pub async fn get_evaluator_by_user_id_impl(&self, user_id: i64) -> Result<Option<Evaluator>> {
        let result = Evaluators::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar avaliador: {e}")))?;

        Ok(result.map(|m| m.into_evaluator()))
    }

    /// Verifica se o PIN já está em uso. Tombstones contam: o PIN é único
    /// na tabela inteira.
    pub async fn pin_exists_impl(&self, pin: &str) -> Result<bool> {
        let found = Evaluators::find()
            .filter(Column::Pin.eq(pin))
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao verificar PIN: {e}")))?;

        Ok(found.is_some())
    }

    /// Lista avaliadores ativos com o nome do usuário vinculado
    pub async fn list_evaluators_impl(&self) -> Result<Vec<EvaluatorWithName>> {
        let rows = Evaluators::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao listar avaliadores: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(evaluator, user)| EvaluatorWithName {
                evaluator: evaluator.into_evaluator(),
                name: user.and_then(|u| u.display_name),
            })
            .collect())
    }
}
