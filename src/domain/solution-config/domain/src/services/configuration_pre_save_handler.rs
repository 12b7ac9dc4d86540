// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::WorkspaceId;

use crate::{ConfigurationArtifact, PreSaveResponse};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Hook run by the hosting application before a configuration record is
/// committed. Always answers, faults included, with a [`PreSaveResponse`].
#[async_trait::async_trait]
pub trait ConfigurationPreSaveHandler: Send + Sync {
    async fn execute(
        &self,
        workspace_id: WorkspaceId,
        artifact: &ConfigurationArtifact,
    ) -> PreSaveResponse;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
