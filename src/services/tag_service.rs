use crate::error::Result;
use crate::models::tag::Tag;
use sqlx::PgPool;

#[derive(Clone)]
pub struct TagService {
    pool: PgPool,
}

impl TagService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(tags)
    }

    pub async fn create(&self, name: &str) -> Result<Tag> {
        let tag = sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name) VALUES ($1) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(tag)
    }

    pub async fn tags_for_vacancy(&self, vacancy_id: i64) -> Result<Vec<Tag>> {
        let tags = sqlx::query_as::<_, Tag>(
            r#"
            SELECT t.id, t.name
            FROM tags t
            JOIN vacancy_tags vt ON vt.tag_id = t.id
            WHERE vt.vacancy_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(vacancy_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tags)
    }
}
