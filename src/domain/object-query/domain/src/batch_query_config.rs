// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use std::num::NonZeroUsize;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_QUERY_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Copy, Clone)]
pub struct BatchQueryConfig {
    /// Maximum number of full objects requested per batch when the caller
    /// does not pick a batch size
    pub default_batch_size: NonZeroUsize,
}

impl BatchQueryConfig {
    pub fn new(default_batch_size: NonZeroUsize) -> Self {
        Self { default_batch_size }
    }
}

impl Default for BatchQueryConfig {
    fn default() -> Self {
        Self {
            default_batch_size: DEFAULT_QUERY_BATCH_SIZE,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
