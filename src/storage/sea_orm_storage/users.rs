//! Operações de usuário

use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, SaipruError};
use crate::models::users::entities::{NewUser, User};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// Cria usuário
    pub async fn create_user_impl(&self, user: NewUser) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
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

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao criar usuário: {e}")))?;

        Ok(result.into_user())
    }

    /// Busca usuário por id
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar usuário: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// Busca usuário por nome de login
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao buscar usuário: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// Atualiza o último login
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(id),
            last_login: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        match model.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(sea_orm::DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(SaipruError::database_operation(format!(
                "falha ao atualizar último login: {e}"
            ))),
        }
    }

    /// Conta usuários
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| SaipruError::database_operation(format!("falha ao contar usuários: {e}")))
    }
}
