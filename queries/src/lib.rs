use entities::prelude::User;
use entities::user;
use sea_orm::prelude::Uuid;
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait};

pub async fn get_user_by_id(
    connection: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<user::Model>, DbErr> {
    User::find_by_id(id).one(connection).await
}

/// Writes the whole user document back in one statement. There is no
/// version check: two concurrent writers race and the last save wins.
pub async fn update_user(
    connection: &DatabaseConnection,
    user: user::Model,
) -> Result<user::Model, DbErr> {
    let active = user::ActiveModel {
        id: Unchanged(user.id),
        name: Set(user.name),
        email: Set(user.email),
        password: Set(user.password),
        avatar: Set(user.avatar),
        favorites: Set(user.favorites),
        playlists: Set(user.playlists),
        created: Set(user.created),
    };
    active.update(connection).await
}
