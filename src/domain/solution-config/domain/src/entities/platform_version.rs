// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Version of the hosting platform: `major.minor[.patch[.revision]]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformVersion {
    version: semver::Version,
    revision: u64,
}

impl PlatformVersion {
    pub fn new(major: u64, minor: u64, patch: u64, revision: u64) -> Self {
        Self {
            version: semver::Version::new(major, minor, patch),
            revision,
        }
    }
}

impl Ord for PlatformVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp_precedence(&other.version)
            .then(self.revision.cmp(&other.revision))
    }
}

impl PartialOrd for PlatformVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for PlatformVersion {
    type Err = InvalidPlatformVersionError;

    /// Accepts `major.minor[.patch[.revision]]`, missing components are zero
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidPlatformVersionError {
            value: s.to_string(),
        };

        let components = s
            .trim()
            .split('.')
            .map(|c| {
                if c.is_empty() || !c.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                c.parse::<u64>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;

        match components[..] {
            [major, minor] => Ok(Self::new(major, minor, 0, 0)),
            [major, minor, patch] => Ok(Self::new(major, minor, patch, 0)),
            [major, minor, patch, revision] => Ok(Self::new(major, minor, patch, revision)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.version, self.revision)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid platform version: '{value}'")]
pub struct InvalidPlatformVersionError {
    pub value: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
