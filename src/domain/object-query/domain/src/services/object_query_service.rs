// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::fmt;

use internal_error::InternalError;
use thiserror::Error;

use crate::{QueryRequest, QueryResultPage, WorkspaceId};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client of the remote object query service.
///
/// One call returns at most `length` objects starting at the 1-based
/// position `start`, together with the total number of matches. Retries,
/// deadlines and authentication belong to the implementation.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait ObjectQueryService: Send + Sync {
    async fn query(
        &self,
        workspace_id: WorkspaceId,
        request: &QueryRequest,
        start: usize,
        length: usize,
    ) -> Result<QueryResultPage, InternalError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueryPhase {
    IdentifierLookup,
    BatchRetrieval,
    SingletonCheck,
}

impl fmt::Display for QueryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::IdentifierLookup => "identifier lookup",
                Self::BatchRetrieval => "batch retrieval",
                Self::SingletonCheck => "singleton check",
            }
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Remote query failed during {phase} in workspace {workspace_id} at start {start}")]
pub struct RemoteQueryError {
    pub phase: QueryPhase,
    pub workspace_id: WorkspaceId,
    pub start: usize,
    #[source]
    pub source: InternalError,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
