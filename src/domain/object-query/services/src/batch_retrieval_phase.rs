// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::num::NonZeroUsize;

use object_query::{
    AccumulatedQueryResult,
    BatchQueryError,
    EmptyBatchError,
    IdentifierBatch,
    ObjectQueryService,
    QueryPhase,
    QueryRequest,
    WorkspaceId,
};

use crate::{PageFetcher, PaginationEngine};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Re-queries full objects for one batch of identifiers, keeping the
/// original object type, fields, sorts and relational field
pub struct BatchRetrievalPhase<'a> {
    pagination_engine: PaginationEngine<'a>,
}

impl<'a> BatchRetrievalPhase<'a> {
    pub fn new(object_query_service: &'a dyn ObjectQueryService, workspace_id: WorkspaceId) -> Self {
        Self {
            pagination_engine: PaginationEngine::new(PageFetcher::new(
                object_query_service,
                workspace_id,
                QueryPhase::BatchRetrieval,
            )),
        }
    }

    pub async fn retrieve_batch(
        &self,
        original_query: &QueryRequest,
        batch: &IdentifierBatch,
    ) -> Result<AccumulatedQueryResult, BatchQueryError> {
        let page_size = NonZeroUsize::new(batch.len()).ok_or(EmptyBatchError)?;
        let batch_query = original_query.scoped_to(batch.membership_condition());

        let result = self
            .pagination_engine
            .fetch_all(&batch_query, page_size)
            .await?;

        Ok(result)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
