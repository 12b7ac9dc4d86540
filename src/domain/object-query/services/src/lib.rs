// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


mod batch_query_service_impl;
mod batch_retrieval_phase;
mod dependencies;
mod identifier_phase;
mod page_fetcher;
mod pagination_engine;

pub use batch_query_service_impl::*;
pub use batch_retrieval_phase::*;
pub use dependencies::*;
pub use identifier_phase::*;
pub use page_fetcher::*;
pub use pagination_engine::*;
