use crate::domain::journals::Neighbours;
use crate::domain::projects::{
    NewProject, Project, ProjectRepository, SavedProject, TagRef, UpdateProject,
};
use crate::domain::tags::Tag;
use crate::infrastructure::db::DbPool;
use crate::infrastructure::db::models::journals::NeighboursDbModel;
use crate::infrastructure::db::models::projects::ProjectDbModel;
use crate::infrastructure::db::models::tags::TagDbModel;
use async_trait::async_trait;
use sqlx::postgres::PgExecutor;

const PROJECT_SELECT: &str = r#"
    SELECT p.id, p.title, p.description, p.image_url, p.link, p.github, p.status, p.user_id,
        COALESCE(array_agg(t.name ORDER BY t.name) FILTER (WHERE t.name IS NOT NULL), '{}') AS tags,
        p.created_at, p.updated_at
    FROM projects p
    LEFT JOIN project_tags pt ON pt.project_id = p.id
    LEFT JOIN tags t ON t.id = pt.tag_id
"#;

#[derive(Clone)]
pub struct PostgresProjectRepository {
    pool: DbPool,
}

impl PostgresProjectRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn fetch_project<'e, E>(executor: E, id: i64) -> Result<Option<Project>, anyhow::Error>
where
    E: PgExecutor<'e>,
{
    let project = sqlx::query_as::<_, ProjectDbModel>(&format!(
        "{PROJECT_SELECT} WHERE p.id = $1 GROUP BY p.id"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await?;

    project.map(Project::try_from).transpose()
}

/// Unknown ids fail with `RowNotFound`, which aborts the surrounding transaction.
async fn resolve_tag<'e, E>(executor: E, tag: &TagRef) -> Result<Tag, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let tag = match tag {
        TagRef::Id(id) => {
            sqlx::query_as::<_, TagDbModel>("SELECT id, name FROM tags WHERE id = $1")
                .bind(id)
                .fetch_one(executor)
                .await?
        }
        TagRef::Name(name) => {
            sqlx::query_as::<_, TagDbModel>(
                r#"
                INSERT INTO tags (name) VALUES ($1)
                ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id, name
                "#,
            )
            .bind(name)
            .fetch_one(executor)
            .await?
        }
    };

    Ok(tag.into())
}

async fn link_tag<'e, E>(executor: E, project_id: i64, tag_id: i64) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO project_tags (project_id, tag_id) VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(project_id)
    .bind(tag_id)
    .execute(executor)
    .await?;

    Ok(())
}

async fn linked_tags<'e, E>(executor: E, project_id: i64) -> Result<Vec<Tag>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let tags = sqlx::query_as::<_, TagDbModel>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        JOIN project_tags pt ON pt.tag_id = t.id
        WHERE pt.project_id = $1
        ORDER BY t.name ASC
        "#,
    )
    .bind(project_id)
    .fetch_all(executor)
    .await?;

    Ok(tags.into_iter().map(Into::into).collect())
}

#[async_trait]
impl ProjectRepository for PostgresProjectRepository {
    #[tracing::instrument(skip(self, new_project), fields(user_id = new_project.user_id, tags = new_project.tags.len()))]
    async fn create_with_tags(&self, new_project: NewProject) -> Result<SavedProject, anyhow::Error> {
        let mut tx = self.pool.begin().await?;

        let (project_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO projects (title, description, image_url, link, github, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&new_project.title)
        .bind(&new_project.description)
        .bind(&new_project.image_url)
        .bind(&new_project.link)
        .bind(&new_project.github)
        .bind(new_project.status.as_str())
        .bind(new_project.user_id)
        .fetch_one(&mut *tx)
        .await?;

        for tag_ref in &new_project.tags {
            let tag = resolve_tag(&mut *tx, tag_ref).await?;
            link_tag(&mut *tx, project_id, tag.id).await?;
        }

        let project = fetch_project(&mut *tx, project_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("project {project_id} vanished inside its own transaction"))?;
        let tags = linked_tags(&mut *tx, project_id).await?;

        tx.commit().await?;

        Ok(SavedProject { project, tags })
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, anyhow::Error> {
        fetch_project(&self.pool, id).await
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, limit: i64, offset: i64) -> Result<Vec<Project>, anyhow::Error> {
        let projects = sqlx::query_as::<_, ProjectDbModel>(&format!(
            "{PROJECT_SELECT} GROUP BY p.id ORDER BY p.created_at DESC, p.id DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        projects.into_iter().map(Project::try_from).collect()
    }

    #[tracing::instrument(skip(self, update))]
    async fn update(
        &self,
        id: i64,
        update: UpdateProject,
    ) -> Result<Option<SavedProject>, anyhow::Error> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<(i64,)> = sqlx::query_as(
            r#"
            UPDATE projects
            SET title = $2, description = $3, image_url = $4, link = $5, github = $6,
                status = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.image_url)
        .bind(&update.link)
        .bind(&update.github)
        .bind(update.status.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(tag_refs) = &update.tags {
            sqlx::query("DELETE FROM project_tags WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for tag_ref in tag_refs {
                let tag = resolve_tag(&mut *tx, tag_ref).await?;
                link_tag(&mut *tx, id, tag.id).await?;
            }
        }

        let project = fetch_project(&mut *tx, id).await?;
        let tags = linked_tags(&mut *tx, id).await?;

        tx.commit().await?;

        Ok(project.map(|project| SavedProject { project, tags }))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool, anyhow::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn neighbours(&self, id: i64) -> Result<Neighbours, anyhow::Error> {
        let neighbours = sqlx::query_as::<_, NeighboursDbModel>(
            r#"
            SELECT
                (SELECT MAX(id) FROM projects WHERE id < $1) AS previous_id,
                (SELECT MIN(id) FROM projects WHERE id > $1) AS next_id
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(neighbours.into())
    }
}
