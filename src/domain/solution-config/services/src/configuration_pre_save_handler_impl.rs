// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::error::Error;
use std::sync::Arc;

use object_query::WorkspaceId;
use solution_config::{
    ConfigurationArtifact,
    ConfigurationPreSaveHandler,
    ERROR_MAX_INSTANCES,
    PreSaveResponse,
    SingletonConfigurationCheck,
    SolutionToggler,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn ConfigurationPreSaveHandler)]
pub struct ConfigurationPreSaveHandlerImpl {
    singleton_check: Arc<dyn SingletonConfigurationCheck>,
    solution_toggler: Arc<dyn SolutionToggler>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl ConfigurationPreSaveHandler for ConfigurationPreSaveHandlerImpl {
    #[tracing::instrument(
        level = "info",
        skip_all,
        fields(%workspace_id, artifact_id = ?artifact.artifact_id)
    )]
    async fn execute(
        &self,
        workspace_id: WorkspaceId,
        artifact: &ConfigurationArtifact,
    ) -> PreSaveResponse {
        let check_result = match self
            .singleton_check
            .check(workspace_id, artifact.artifact_id)
            .await
        {
            Ok(check_result) => check_result,
            Err(e) => return failure_response(&e),
        };

        if !check_result.is_available() {
            return PreSaveResponse::failure(ERROR_MAX_INSTANCES);
        }

        match self
            .solution_toggler
            .toggle(artifact.enabled == Some(true), artifact.allow_access_on_error)
            .await
        {
            Ok(()) => PreSaveResponse::success(),
            Err(e) => failure_response(&e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn failure_response(error: &(dyn Error + 'static)) -> PreSaveResponse {
    tracing::error!(error = ?error, error_msg = %error, "Configuration pre-save failed");

    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(e) = source {
        message.push_str(": ");
        message.push_str(&e.to_string());
        source = e.source();
    }

    PreSaveResponse::failure(message)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
