//! Client entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub cpf: String,
    #[sea_orm(column_type = "Double")]
    pub income: f64,
    pub birth_date: DateTimeWithTimeZone,
    pub children: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Client.
impl From<Model> for clients_core::domain::Client {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            cpf: model.cpf,
            income: model.income,
            birth_date: model.birth_date.into(),
            children: model.children,
        }
    }
}

/// Conversion from Domain Client to SeaORM ActiveModel.
///
/// A client without an id leaves the key unset so that `save` inserts it.
impl From<clients_core::domain::Client> for ActiveModel {
    fn from(client: clients_core::domain::Client) -> Self {
        Self {
            id: client.id.map_or(NotSet, Set),
            name: Set(client.name),
            cpf: Set(client.cpf),
            income: Set(client.income),
            birth_date: Set(client.birth_date.into()),
            children: Set(client.children),
        }
    }
}
