// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::error::Error;
use std::num::NonZeroUsize;

use internal_error::InternalError;
use mockall::predicate::{always, eq};
use object_query::*;
use object_query_services::{PageFetcher, PaginationEngine};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const WORKSPACE: WorkspaceId = WorkspaceId::new(1017);

fn page_size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn query() -> QueryRequest {
    QueryRequest::new(ObjectTypeRef::Name("Document".to_string()))
}

fn page(ids: std::ops::RangeInclusive<i32>, total_count: usize) -> QueryResultPage {
    QueryResultPage::new(
        ids.map(|id| QueryObject::new(ArtifactId::new(id))).collect(),
        total_count,
    )
}

fn expect_page(
    mock: &mut MockObjectQueryService,
    start: usize,
    result: impl Fn() -> Result<QueryResultPage, InternalError> + Send + 'static,
) {
    mock.expect_query()
        .with(eq(WORKSPACE), always(), eq(start), always())
        .times(1)
        .returning(move |_, _, _, _| result());
}

fn collected_ids(result: &AccumulatedQueryResult) -> Vec<i32> {
    result
        .objects
        .iter()
        .map(|o| o.artifact_id.into_inner())
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_fits_on_one_page() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=1, 1)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::IdentifierLookup,
    ));
    let result = engine.fetch_all(&query(), page_size(5)).await.unwrap();

    pretty_assertions::assert_eq!(collected_ids(&result), vec![1]);
    assert_eq!(result.result_count, 1);
    assert_eq!(result.total_count, 1);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_more_than_a_page() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=3, 7)));
    expect_page(&mut mock, 4, || Ok(page(4..=6, 7)));
    expect_page(&mut mock, 7, || Ok(page(7..=7, 7)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::IdentifierLookup,
    ));
    let result = engine.fetch_all(&query(), page_size(3)).await.unwrap();

    pretty_assertions::assert_eq!(collected_ids(&result), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(result.result_count, 7);
    assert_eq!(result.total_count, 7);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_total_count_multiple_of_page_size_probes_one_empty_page() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=3, 6)));
    expect_page(&mut mock, 4, || Ok(page(4..=6, 6)));
    expect_page(&mut mock, 7, || Ok(QueryResultPage::new(vec![], 6)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::IdentifierLookup,
    ));
    let result = engine.fetch_all(&query(), page_size(3)).await.unwrap();

    pretty_assertions::assert_eq!(collected_ids(&result), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(result.total_count, 6);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_empty_first_page_stops_regardless_of_total() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(QueryResultPage::new(vec![], 25)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::IdentifierLookup,
    ));
    let result = engine.fetch_all(&query(), page_size(10)).await.unwrap();

    assert!(result.objects.is_empty());
    assert_eq!(result.result_count, 0);
    assert_eq!(result.total_count, 25);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_stops_on_a_later_page_without_progress() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=2, 10)));
    expect_page(&mut mock, 3, || Ok(QueryResultPage::new(vec![], 10)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::BatchRetrieval,
    ));
    let result = engine.fetch_all(&query(), page_size(2)).await.unwrap();

    pretty_assertions::assert_eq!(collected_ids(&result), vec![1, 2]);
    assert_eq!(result.total_count, 10);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_follows_the_latest_total_count() {
    // The set shrinks from 9 to 4 matches after the first page
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=3, 9)));
    expect_page(&mut mock, 4, || Ok(page(4..=4, 4)));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::IdentifierLookup,
    ));
    let result = engine.fetch_all(&query(), page_size(3)).await.unwrap();

    pretty_assertions::assert_eq!(collected_ids(&result), vec![1, 2, 3, 4]);
    assert_eq!(result.result_count, 4);
    assert_eq!(result.total_count, 4);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pagination_wraps_remote_failures_with_context() {
    let mut mock = MockObjectQueryService::new();
    expect_page(&mut mock, 1, || Ok(page(1..=2, 4)));
    expect_page(&mut mock, 3, || InternalError::bail("connection reset"));

    let engine = PaginationEngine::new(PageFetcher::new(
        &mock,
        WORKSPACE,
        QueryPhase::BatchRetrieval,
    ));
    let err = engine.fetch_all(&query(), page_size(2)).await.unwrap_err();

    assert_eq!(err.phase, QueryPhase::BatchRetrieval);
    assert_eq!(err.workspace_id, WORKSPACE);
    assert_eq!(err.start, 3);
    assert_eq!(
        err.to_string(),
        "Remote query failed during batch retrieval in workspace 1017 at start 3"
    );
    assert_eq!(
        err.source.source().unwrap().to_string(),
        "connection reset"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
