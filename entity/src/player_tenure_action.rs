use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_tenure_action")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clan_tag: String,
    pub player_tag: String,
    pub player_name: Option<String>,
    /// `granted` or `revoked`
    pub action: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub reason: Option<String>,
    pub granted_by: String,
    pub created_at: DateTime,
    pub archived_at: Option<DateTime>,
    pub archived_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
