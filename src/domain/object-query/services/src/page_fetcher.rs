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
    ObjectQueryService,
    QueryPhase,
    QueryRequest,
    QueryResultPage,
    RemoteQueryError,
    WorkspaceId,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Issues exactly one remote call per [`PageFetcher::fetch_page`].
/// Failures are tagged with the phase and workspace, never retried.
#[derive(Clone, Copy)]
pub struct PageFetcher<'a> {
    object_query_service: &'a dyn ObjectQueryService,
    workspace_id: WorkspaceId,
    phase: QueryPhase,
}

impl<'a> PageFetcher<'a> {
    pub fn new(
        object_query_service: &'a dyn ObjectQueryService,
        workspace_id: WorkspaceId,
        phase: QueryPhase,
    ) -> Self {
        Self {
            object_query_service,
            workspace_id,
            phase,
        }
    }

    pub fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    /// `start` is 1-based
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(workspace_id = %self.workspace_id, phase = %self.phase, start, length = length.get())
    )]
    pub async fn fetch_page(
        &self,
        query: &QueryRequest,
        start: usize,
        length: NonZeroUsize,
    ) -> Result<QueryResultPage, RemoteQueryError> {
        debug_assert!(start >= 1, "Remote offsets are 1-based");

        let page = self
            .object_query_service
            .query(self.workspace_id, query, start, length.get())
            .await
            .map_err(|e| RemoteQueryError {
                phase: self.phase,
                workspace_id: self.workspace_id,
                start,
                source: e,
            })?;

        tracing::debug!(
            result_count = page.result_count,
            total_count = page.total_count,
            "Received page"
        );

        Ok(page)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
