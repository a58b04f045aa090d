use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r#"CREATE TABLE "user"
(
    id uuid default gen_random_uuid() not null primary key,
    name varchar not null,
    email varchar not null unique,
    password varchar not null,
    avatar varchar,
    favorites jsonb not null default '[]',
    playlists jsonb not null default '[]',
    created timestamp not null default now()
);"#,
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(r#"DROP TABLE "user";"#).await?;
        Ok(())
    }
}
