// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::num::NonZeroUsize;
use std::sync::Arc;

use dill::*;
use object_query::{
    BatchQueryConfig,
    BatchQueryService,
    IdentifierBatch,
    ObjectQueryService,
    QueryObjectStream,
    QueryRequest,
    WorkspaceId,
};

use crate::{BatchRetrievalPhase, IdentifierPhase};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct BatchQueryServiceImpl {
    object_query_service: Arc<dyn ObjectQueryService>,
    config: Arc<BatchQueryConfig>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn BatchQueryService)]
impl BatchQueryServiceImpl {
    pub fn new(
        object_query_service: Arc<dyn ObjectQueryService>,
        config: Arc<BatchQueryConfig>,
    ) -> Self {
        Self {
            object_query_service,
            config,
        }
    }
}

impl BatchQueryService for BatchQueryServiceImpl {
    fn query_subset<'a>(
        &'a self,
        workspace_id: WorkspaceId,
        query: &'a QueryRequest,
        batch_size: NonZeroUsize,
    ) -> QueryObjectStream<'a> {
        let object_query_service = self.object_query_service.as_ref();

        Box::pin(async_stream::try_stream! {
            let artifact_ids = IdentifierPhase::new(object_query_service, workspace_id)
                .fetch_identifiers(query, batch_size)
                .await?;

            tracing::debug!(
                %workspace_id,
                identifiers_count = artifact_ids.len(),
                batch_size = batch_size.get(),
                "Resolved identifiers, retrieving objects in batches"
            );

            let batch_retrieval = BatchRetrievalPhase::new(object_query_service, workspace_id);

            for (batch_index, chunk) in artifact_ids.chunks(batch_size.get()).enumerate() {
                let batch = IdentifierBatch::new(chunk.to_vec())?;

                tracing::debug!(
                    %workspace_id,
                    batch_index,
                    batch_len = batch.len(),
                    "Retrieving batch"
                );

                let retrieved = batch_retrieval.retrieve_batch(query, &batch).await?;

                for object in retrieved.objects {
                    yield object;
                }
            }
        })
    }

    fn query_subset_default<'a>(
        &'a self,
        workspace_id: WorkspaceId,
        query: &'a QueryRequest,
    ) -> QueryObjectStream<'a> {
        self.query_subset(workspace_id, query, self.config.default_batch_size)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
