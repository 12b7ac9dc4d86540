// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use object_query::*;
use object_query_inmem::InMemoryObjectQueryService;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const WORKSPACE: WorkspaceId = WorkspaceId::new(1017);

fn custodian_type() -> ObjectTypeRef {
    ObjectTypeRef::Name("Custodian".to_string())
}

fn seeded_service() -> InMemoryObjectQueryService {
    let service = InMemoryObjectQueryService::new();
    service.add_objects(
        WORKSPACE,
        &custodian_type(),
        [
            (3, "Carol", 41),
            (1, "Alice", 35),
            (2, "Bob", 35),
            (4, "Dave", 29),
        ]
        .into_iter()
        .map(|(id, name, age)| {
            QueryObject::new(ArtifactId::new(id))
                .with_value(FieldRef::name("Name"), name)
                .with_value(FieldRef::name("Age"), age)
        }),
    );
    service
}

fn ids(page: &QueryResultPage) -> Vec<i32> {
    page.objects
        .iter()
        .map(|o| o.artifact_id.into_inner())
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_pages_are_one_based() {
    let service = seeded_service();
    let query = QueryRequest::new(custodian_type());

    let first = service.query(WORKSPACE, &query, 1, 3).await.unwrap();
    pretty_assertions::assert_eq!(ids(&first), vec![1, 2, 3]);
    assert_eq!(first.result_count, 3);
    assert_eq!(first.total_count, 4);

    let second = service.query(WORKSPACE, &query, 4, 3).await.unwrap();
    pretty_assertions::assert_eq!(ids(&second), vec![4]);
    assert_eq!(second.total_count, 4);

    let beyond = service.query(WORKSPACE, &query, 5, 3).await.unwrap();
    assert!(beyond.objects.is_empty());
    assert_eq!(beyond.result_count, 0);

    assert!(service.query(WORKSPACE, &query, 0, 3).await.is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_projects_requested_fields_only() {
    let service = seeded_service();

    let no_fields = service
        .query(WORKSPACE, &QueryRequest::new(custodian_type()), 1, 1)
        .await
        .unwrap();
    assert!(no_fields.objects[0].field_values.is_empty());

    let with_fields = service
        .query(
            WORKSPACE,
            &QueryRequest::new(custodian_type())
                .with_fields(vec![FieldRef::name("Name"), FieldRef::name("Missing")]),
            1,
            1,
        )
        .await
        .unwrap();
    pretty_assertions::assert_eq!(
        with_fields.objects[0].field_values,
        vec![
            FieldValuePair {
                field: FieldRef::name("Name"),
                value: serde_json::json!("Alice"),
            },
            FieldValuePair {
                field: FieldRef::name("Missing"),
                value: serde_json::Value::Null,
            },
        ]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_conditions() {
    let service = seeded_service();
    service.register_condition("'Age' > 30", |object| {
        object
            .value(&FieldRef::name("Age"))
            .and_then(serde_json::Value::as_i64)
            .is_some_and(|age| age > 30)
    });

    let membership = service
        .query(
            WORKSPACE,
            &QueryRequest::new(custodian_type()).with_condition("('Artifact ID' IN (4,2))"),
            1,
            10,
        )
        .await
        .unwrap();
    pretty_assertions::assert_eq!(ids(&membership), vec![2, 4]);
    assert_eq!(membership.total_count, 2);

    let registered = service
        .query(
            WORKSPACE,
            &QueryRequest::new(custodian_type()).with_condition("'Age' > 30"),
            1,
            10,
        )
        .await
        .unwrap();
    pretty_assertions::assert_eq!(ids(&registered), vec![1, 2, 3]);

    let unknown = service
        .query(
            WORKSPACE,
            &QueryRequest::new(custodian_type()).with_condition("'Name' LIKE 'A%'"),
            1,
            10,
        )
        .await;
    assert!(unknown.is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_sorts_with_artifact_id_tie_break() {
    let service = seeded_service();

    let page = service
        .query(
            WORKSPACE,
            &QueryRequest::new(custodian_type())
                .with_sorts(vec![Sort::descending(FieldRef::name("Age"))]),
            1,
            10,
        )
        .await
        .unwrap();

    pretty_assertions::assert_eq!(ids(&page), vec![3, 1, 2, 4]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_unknown_scope_is_empty_and_calls_are_recorded() {
    let service = seeded_service();
    let query = QueryRequest::new(custodian_type());

    let other_workspace = service
        .query(WorkspaceId::new(42), &query, 1, 10)
        .await
        .unwrap();
    assert!(other_workspace.objects.is_empty());
    assert_eq!(other_workspace.total_count, 0);

    service.fail_call(2);
    assert!(service.query(WORKSPACE, &query, 1, 10).await.is_err());
    assert!(service.query(WORKSPACE, &query, 1, 10).await.is_ok());

    let calls = service.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].workspace_id, WorkspaceId::new(42));
    assert_eq!(calls[1].start, 1);
    assert_eq!(calls[1].length, 10);

    service.clear_calls();
    assert!(service.calls().is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
