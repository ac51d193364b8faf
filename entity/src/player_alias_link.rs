use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player_alias_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub clan_tag: String,
    pub player_tag_1: String,
    pub player_tag_2: String,
    pub created_by: String,
    pub created_at: DateTime,
    /// Tombstone, links are never physically deleted
    pub removed_at: Option<DateTime>,
    pub removed_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
