//! GetPaginatedDutiesHandler - Query handler for listing duties page by page.

use std::sync::Arc;

use crate::application::views::PaginatedDutiesView;
use crate::domain::duty::DutyError;
use crate::ports::{DutyRepository, PageRequest};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Query for one page of duties.
#[derive(Debug, Clone, Default)]
pub struct GetPaginatedDutiesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl GetPaginatedDutiesQuery {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self { page, limit }
    }

    /// Page 0 becomes 1, limit 0 becomes the default, limit is capped.
    fn to_page_request(&self) -> PageRequest {
        let page = self.page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE);
        let limit = self
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        PageRequest::new(page, limit)
    }
}

/// Handler for paginated duty listing.
pub struct GetPaginatedDutiesHandler {
    duties: Arc<dyn DutyRepository>,
}

impl GetPaginatedDutiesHandler {
    pub fn new(duties: Arc<dyn DutyRepository>) -> Self {
        Self { duties }
    }

    pub async fn handle(
        &self,
        query: GetPaginatedDutiesQuery,
    ) -> Result<PaginatedDutiesView, DutyError> {
        let request = query.to_page_request();
        let page = self.duties.find_all_paginated(&request).await?;

        Ok(PaginatedDutiesView::new(
            &page.items,
            page.total,
            request.page,
            request.limit,
        ))
    }
}
