// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::num::NonZeroUsize;
use std::pin::Pin;

use futures::Stream;
use thiserror::Error;

use crate::{EmptyBatchError, QueryObject, QueryRequest, RemoteQueryError, WorkspaceId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type QueryObjectStream<'a> =
    Pin<Box<dyn Stream<Item = Result<QueryObject, BatchQueryError>> + Send + 'a>>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub trait BatchQueryService: Send + Sync {
    /// Lazily streams every object matching `query`.
    ///
    /// Identifiers of all matches are resolved first, then full objects are
    /// fetched `batch_size` identifiers at a time, in identifier order.
    /// Nothing is requested until the stream is polled. The stream is
    /// single-pass: the first error terminates it, objects already yielded
    /// stay yielded.
    fn query_subset<'a>(
        &'a self,
        workspace_id: WorkspaceId,
        query: &'a QueryRequest,
        batch_size: NonZeroUsize,
    ) -> QueryObjectStream<'a>;

    /// Same as [`BatchQueryService::query_subset`] with the configured
    /// default batch size
    fn query_subset_default<'a>(
        &'a self,
        workspace_id: WorkspaceId,
        query: &'a QueryRequest,
    ) -> QueryObjectStream<'a>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait BatchQueryServiceExt {
    async fn query_subset_collect(
        &self,
        workspace_id: WorkspaceId,
        query: &QueryRequest,
        batch_size: NonZeroUsize,
    ) -> Result<Vec<QueryObject>, BatchQueryError>;
}

#[async_trait::async_trait]
impl<T: BatchQueryService + ?Sized> BatchQueryServiceExt for T {
    async fn query_subset_collect(
        &self,
        workspace_id: WorkspaceId,
        query: &QueryRequest,
        batch_size: NonZeroUsize,
    ) -> Result<Vec<QueryObject>, BatchQueryError> {
        use futures::TryStreamExt;

        self.query_subset(workspace_id, query, batch_size)
            .try_collect()
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum BatchQueryError {
    #[error(transparent)]
    RemoteQuery(#[from] RemoteQueryError),

    #[error(transparent)]
    EmptyBatch(#[from] EmptyBatchError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
