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
    ArtifactId,
    ObjectQueryService,
    QueryPhase,
    QueryRequest,
    RemoteQueryError,
    WorkspaceId,
};

use crate::{PageFetcher, PaginationEngine};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves which objects match a query by fetching identifiers only
pub struct IdentifierPhase<'a> {
    pagination_engine: PaginationEngine<'a>,
}

impl<'a> IdentifierPhase<'a> {
    pub fn new(object_query_service: &'a dyn ObjectQueryService, workspace_id: WorkspaceId) -> Self {
        Self {
            pagination_engine: PaginationEngine::new(PageFetcher::new(
                object_query_service,
                workspace_id,
                QueryPhase::IdentifierLookup,
            )),
        }
    }

    pub async fn fetch_identifiers(
        &self,
        original_query: &QueryRequest,
        page_size: NonZeroUsize,
    ) -> Result<Vec<ArtifactId>, RemoteQueryError> {
        let identifiers_query = original_query.identifiers_only();

        let result = self
            .pagination_engine
            .fetch_all(&identifiers_query, page_size)
            .await?;

        Ok(result
            .objects
            .into_iter()
            .map(|object| object.artifact_id)
            .collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
