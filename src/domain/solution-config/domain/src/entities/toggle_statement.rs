// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::fmt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Which flavour of the toggle statements the platform understands
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatementVariant {
    /// Platforms older than the supported release
    Legacy,
    Current,
}

impl fmt::Display for StatementVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Legacy => "legacy",
                Self::Current => "current",
            }
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PARAM_HTML: &str = "@HTML";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementParameter {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleStatement {
    Enable { login_page_html: String },
    Disable,
}

impl ToggleStatement {
    pub fn name(&self, variant: StatementVariant) -> &'static str {
        match (self, variant) {
            (Self::Enable { .. }, StatementVariant::Legacy) => "EnableDisclaimerSolution",
            (Self::Enable { .. }, StatementVariant::Current) => "EnableDisclaimerSolutionCurrent",
            (Self::Disable, StatementVariant::Legacy) => "DisableDisclaimerSolution",
            (Self::Disable, StatementVariant::Current) => "DisableDisclaimerSolutionCurrent",
        }
    }

    pub fn parameters(&self) -> Vec<StatementParameter> {
        match self {
            Self::Enable { login_page_html } => vec![StatementParameter {
                name: PARAM_HTML,
                value: login_page_html.clone(),
            }],
            Self::Disable => vec![],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
