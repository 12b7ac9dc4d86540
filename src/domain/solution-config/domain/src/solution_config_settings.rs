// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::ObjectTypeRef;
use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_SUPPORTED_RELEASE: &str = "9.4.0";

pub const DEFAULT_CONFIGURATION_OBJECT_TYPE_NAME: &str = "Disclaimer Solution Configuration";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct SolutionConfigSettings {
    pub configuration_object_type: ObjectTypeRef,
    pub application_guid: Uuid,
    /// Version of the running platform, as reported by the host
    pub platform_version: String,
    /// First release with the current statement variant
    pub supported_release: String,
}

impl SolutionConfigSettings {
    pub fn new(application_guid: Uuid, platform_version: impl Into<String>) -> Self {
        Self {
            application_guid,
            platform_version: platform_version.into(),
            ..Self::default()
        }
    }
}

impl Default for SolutionConfigSettings {
    fn default() -> Self {
        Self {
            configuration_object_type: ObjectTypeRef::Name(
                DEFAULT_CONFIGURATION_OBJECT_TYPE_NAME.to_string(),
            ),
            application_guid: Uuid::nil(),
            platform_version: DEFAULT_SUPPORTED_RELEASE.to_string(),
            supported_release: DEFAULT_SUPPORTED_RELEASE.to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
