use sea_orm::entity::prelude::*;

use crate::playlist::Playlists;
use crate::track::Favorites;

/// The user document. `favorites` and `playlists` are nested collections
/// stored as jsonb; every mutation rewrites the whole row.
#[derive(PartialEq, Eq, Clone, Debug, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub favorites: Favorites,
    #[sea_orm(column_type = "JsonBinary")]
    pub playlists: Playlists,
    pub created: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
