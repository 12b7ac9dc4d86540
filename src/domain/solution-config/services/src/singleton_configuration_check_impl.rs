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

use object_query::{ArtifactId, ObjectQueryService, QueryPhase, QueryRequest, WorkspaceId};
use object_query_services::PageFetcher;
use solution_config::{
    SingletonCheckError,
    SingletonCheckResult,
    SingletonConfigurationCheck,
    SingletonViolation,
    SolutionConfigSettings,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn SingletonConfigurationCheck)]
pub struct SingletonConfigurationCheckImpl {
    object_query_service: Arc<dyn ObjectQueryService>,
    settings: Arc<SolutionConfigSettings>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SingletonConfigurationCheck for SingletonConfigurationCheckImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%workspace_id, ?active_artifact_id))]
    async fn check(
        &self,
        workspace_id: WorkspaceId,
        active_artifact_id: Option<ArtifactId>,
    ) -> Result<SingletonCheckResult, SingletonCheckError> {
        // Identifiers only: the total count is all that matters, plus the
        // first match when there is exactly one
        let query = QueryRequest::new(self.settings.configuration_object_type.clone());

        let page = PageFetcher::new(
            self.object_query_service.as_ref(),
            workspace_id,
            QueryPhase::SingletonCheck,
        )
        .fetch_page(&query, 1, NonZeroUsize::MIN)
        .await
        .map_err(SingletonCheckError::RemoteQuery)?;

        let result = match page.total_count {
            0 => SingletonCheckResult::Available,
            1 => {
                let existing = page.objects.first().map(|object| object.artifact_id);
                if existing.is_some() && existing == active_artifact_id {
                    SingletonCheckResult::Available
                } else {
                    SingletonCheckResult::Violation(SingletonViolation::DifferentInstanceExists {
                        existing,
                    })
                }
            }
            total_count => {
                SingletonCheckResult::Violation(SingletonViolation::MultipleInstances { total_count })
            }
        };

        if let SingletonCheckResult::Violation(violation) = &result {
            tracing::warn!(?violation, "Configuration singleton violated");
        }

        Ok(result)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
