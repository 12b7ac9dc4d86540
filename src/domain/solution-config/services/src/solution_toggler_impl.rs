// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::sync::Arc;

use solution_config::{
    ConfigurationStore,
    PlatformVersion,
    SolutionConfigSettings,
    SolutionToggler,
    StatementVariant,
    ToggleSolutionError,
    ToggleStatement,
    render_login_page,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[dill::component]
#[dill::interface(dyn SolutionToggler)]
pub struct SolutionTogglerImpl {
    configuration_store: Arc<dyn ConfigurationStore>,
    settings: Arc<SolutionConfigSettings>,
}

impl SolutionTogglerImpl {
    fn statement_variant(&self) -> Result<StatementVariant, ToggleSolutionError> {
        let platform_version: PlatformVersion = self.settings.platform_version.parse()?;
        let supported_release: PlatformVersion = self.settings.supported_release.parse()?;

        Ok(if platform_version >= supported_release {
            StatementVariant::Current
        } else {
            StatementVariant::Legacy
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SolutionToggler for SolutionTogglerImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(enabled, ?allow_access_on_error))]
    async fn toggle(
        &self,
        enabled: bool,
        allow_access_on_error: Option<bool>,
    ) -> Result<(), ToggleSolutionError> {
        let variant = self.statement_variant()?;

        let statement = if enabled {
            ToggleStatement::Enable {
                login_page_html: render_login_page(
                    &self.settings.application_guid,
                    allow_access_on_error.unwrap_or(false),
                ),
            }
        } else {
            ToggleStatement::Disable
        };

        tracing::debug!(
            %variant,
            statement = statement.name(variant),
            "Toggling solution"
        );

        self.configuration_store
            .execute_statement(variant, &statement)
            .await?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
