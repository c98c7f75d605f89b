use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "enquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    pub email: String,

    pub phone: String,

    pub service: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    /// RFC 3339 UTC timestamp, set at insertion
    pub created_at: String,

    /// Free-form status, "new" on insertion
    #[sea_orm(default_value = "new")]
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
