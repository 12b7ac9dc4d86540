// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::{ArtifactId, RemoteQueryError, WorkspaceId};
use thiserror::Error;

use crate::SingletonCheckResult;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SingletonConfigurationCheck: Send + Sync {
    /// Decides whether the configuration record `active_artifact_id` may
    /// hold the singleton slot of `workspace_id`
    async fn check(
        &self,
        workspace_id: WorkspaceId,
        active_artifact_id: Option<ArtifactId>,
    ) -> Result<SingletonCheckResult, SingletonCheckError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SingletonCheckError {
    #[error("Unable to query configuration objects")]
    RemoteQuery(#[source] RemoteQueryError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
