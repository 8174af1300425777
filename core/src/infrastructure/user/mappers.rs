use chrono::Utc;
use sea_orm::ActiveValue::Set;

use crate::domain::user::entities::{User, UserRole};
use crate::entity::users::{ActiveModel as UserActiveModel, Model as UserModel};

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::from(&model)
    }
}

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        User {
            id: model.id,
            name: model.name.clone(),
            email: model.email.clone(),
            role: model.role.parse().unwrap_or(UserRole::User),
            password_hash: model.password_hash.clone(),
            reset_password_token: model.reset_password_token.clone(),
            reset_password_expire: model
                .reset_password_expire
                .map(|dt| dt.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

pub fn to_active_model(user: &User) -> UserActiveModel {
    UserActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        role: Set(user.role.to_string()),
        password_hash: Set(user.password_hash.clone()),
        reset_password_token: Set(user.reset_password_token.clone()),
        reset_password_expire: Set(user.reset_password_expire.map(|dt| dt.fixed_offset())),
        created_at: Set(user.created_at.fixed_offset()),
        updated_at: Set(user.updated_at.fixed_offset()),
    }
}
