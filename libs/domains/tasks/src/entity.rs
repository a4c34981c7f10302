use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the tasks table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub due_date: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Task
impl From<Model> for crate::models::Task {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            due_date: model.due_date,
            status: model.status,
        }
    }
}

// Conversion from domain TaskPayload to Sea-ORM ActiveModel.
// The id stays unset so the store assigns the next key on insert.
impl From<crate::models::TaskPayload> for ActiveModel {
    fn from(input: crate::models::TaskPayload) -> Self {
        ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            due_date: Set(input.due_date),
            status: Set(input.status),
        }
    }
}
