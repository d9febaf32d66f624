use crate::application::journals::get::JournalResponse;
use crate::domain::journals::JournalRepository;
use crate::shared::error::AppError;
use crate::shared::pagination::{PageInfo, PageQuery};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct JournalListResponse {
    pub journals: Vec<JournalResponse>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub has_more: bool,
}

pub struct ListJournalsUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl ListJournalsUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, query: PageQuery) -> Result<JournalListResponse, AppError> {
        query.validate()?;

        let journals = self.repo.find_all(query.limit, query.offset).await?;
        let total = self.repo.count().await?;
        let info = PageInfo::new(query, journals.len(), total);

        Ok(JournalListResponse {
            journals: journals.into_iter().map(Into::into).collect(),
            total: info.total,
            page: info.page,
            limit: info.limit,
            has_more: info.has_more,
        })
    }
}
