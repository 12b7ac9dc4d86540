// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::ArtifactId;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Configuration record that is about to be saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigurationArtifact {
    /// `None` while the record is being created
    pub artifact_id: Option<ArtifactId>,
    pub enabled: Option<bool>,
    pub allow_access_on_error: Option<bool>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
