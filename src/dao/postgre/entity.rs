use sqlx::Error;

use crate::model::{Stored_Entity, Table};

use super::QueryResult;

impl Table<Stored_Entity> {
    pub async fn get_one(
        &self,
        kind: &str,
        id: &str,
    ) -> Result<Option<Stored_Entity>, Error> {
        const SQL: &str = r#"
        SELECT
            "kind",
            "id",
            "data",
            "updated_at"
        FROM "Entity"
        WHERE
            "kind" = $1 AND
            "id" = $2
        "#;

        sqlx::query_as(SQL)
            .bind(kind)
            .bind(id)
            .persistent(false)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn upsert(
        &self,
        data: &Stored_Entity,
    ) -> Result<QueryResult, Error> {
        const SQL: &str = r#"
        INSERT INTO "Entity" (
            "kind",
            "id",
            "data",
            "updated_at"
        )
        VALUES ($1, $2, $3, $4)
        ON CONFLICT ("kind", "id") DO UPDATE
        SET
            "data" = EXCLUDED."data",
            "updated_at" = EXCLUDED."updated_at"
        "#;

        sqlx::query(SQL)
            .bind(&data.kind)
            .bind(&data.id)
            .bind(&data.data)
            .bind(data.updated_at)
            .persistent(false)
            .execute(&self.pool)
            .await
    }
}
