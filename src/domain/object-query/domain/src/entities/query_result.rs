// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use serde::{Deserialize, Serialize};

use crate::QueryObject;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One bounded response of the remote object service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResultPage {
    pub objects: Vec<QueryObject>,
    /// Number of objects in this page
    pub result_count: usize,
    /// Number of objects matching the query overall
    pub total_count: usize,
}

impl QueryResultPage {
    pub fn new(objects: Vec<QueryObject>, total_count: usize) -> Self {
        Self {
            result_count: objects.len(),
            objects,
            total_count,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Pages of a single pagination run, combined in arrival order.
///
/// `total_count` is the value reported by the most recent page, it is never
/// summed. If the data set changes during the run, `total_count` and
/// `objects.len()` may disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatedQueryResult {
    pub objects: Vec<QueryObject>,
    pub result_count: usize,
    pub total_count: usize,
}

impl AccumulatedQueryResult {
    pub fn merge(self, page: QueryResultPage) -> Self {
        let mut objects = self.objects;
        objects.extend(page.objects);

        Self {
            objects,
            result_count: self.result_count + page.result_count,
            total_count: page.total_count,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
