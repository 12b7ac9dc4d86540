// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::num::NonZeroUsize;

use object_query::{AccumulatedQueryResult, QueryRequest, RemoteQueryError};

use crate::PageFetcher;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Drains every page of a single query into one [`AccumulatedQueryResult`].
///
/// The loop advances by the `result_count` of the page just received and
/// keeps going while the start offset is below the most recently reported
/// `total_count`. The total is refreshed on every page, so a data set that
/// changes mid-run may end the loop early or request extra pages.
pub struct PaginationEngine<'a> {
    page_fetcher: PageFetcher<'a>,
}

impl<'a> PaginationEngine<'a> {
    pub fn new(page_fetcher: PageFetcher<'a>) -> Self {
        Self { page_fetcher }
    }

    pub async fn fetch_all(
        &self,
        query: &QueryRequest,
        page_size: NonZeroUsize,
    ) -> Result<AccumulatedQueryResult, RemoteQueryError> {
        let mut start = 1;

        let first_page = self.page_fetcher.fetch_page(query, start, page_size).await?;

        // An empty first page ends the run whatever total the server claims
        if first_page.objects.is_empty() {
            return Ok(AccumulatedQueryResult::default().merge(first_page));
        }

        let mut last_result_count = first_page.result_count;
        let mut accumulated = AccumulatedQueryResult::default().merge(first_page);

        while start < accumulated.total_count {
            start += last_result_count;

            let page = self.page_fetcher.fetch_page(query, start, page_size).await?;

            if page.result_count == 0 && start < page.total_count {
                tracing::warn!(
                    workspace_id = %self.page_fetcher.workspace_id(),
                    phase = %self.page_fetcher.phase(),
                    start,
                    total_count = page.total_count,
                    "Remote service returned an empty page before reaching the total count, \
                     stopping pagination"
                );
                accumulated = accumulated.merge(page);
                break;
            }

            last_result_count = page.result_count;
            accumulated = accumulated.merge(page);
        }

        tracing::debug!(
            result_count = accumulated.result_count,
            total_count = accumulated.total_count,
            "Pagination run finished"
        );

        Ok(accumulated)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
