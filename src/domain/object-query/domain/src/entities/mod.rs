// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


mod identifier_batch;
mod ids;
mod query_object;
mod query_request;
mod query_result;

pub use identifier_batch::*;
pub use ids::*;
pub use query_object::*;
pub use query_request::*;
pub use query_result::*;
