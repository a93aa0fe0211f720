//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{User, UserId, UserName};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rehydrate the aggregate from a stored row.
///
/// Rows that no longer satisfy the value object rules surface as a type error.
impl TryFrom<Model> for User {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let id = UserId::new(model.id).map_err(|e| DbErr::Type(e.to_string()))?;
        let name = UserName::new(model.name).map_err(|e| DbErr::Type(e.to_string()))?;
        Ok(User::new(id, name))
    }
}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Set(user.id().to_string()),
            name: Set(user.name().to_string()),
        }
    }
}
