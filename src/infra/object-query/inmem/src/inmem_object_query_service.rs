// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

use dill::*;
use internal_error::{ErrorIntoInternal, InternalError};
use object_query::*;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type ObjectPredicate = Arc<dyn Fn(&QueryObject) -> bool + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQueryCall {
    pub workspace_id: WorkspaceId,
    pub request: QueryRequest,
    pub start: usize,
    pub length: usize,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Object service double that keeps objects in memory, honours 1-based
/// paging and records every call it receives
pub struct InMemoryObjectQueryService {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    objects: HashMap<(WorkspaceId, ObjectTypeRef), BTreeMap<ArtifactId, QueryObject>>,
    conditions: HashMap<String, ObjectPredicate>,
    failing_calls: HashSet<usize>,
    calls: Vec<RecordedQueryCall>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[component(pub)]
#[interface(dyn ObjectQueryService)]
#[scope(Singleton)]
impl InMemoryObjectQueryService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }
}

impl InMemoryObjectQueryService {
    pub fn add_objects(
        &self,
        workspace_id: WorkspaceId,
        object_type: &ObjectTypeRef,
        objects: impl IntoIterator<Item = QueryObject>,
    ) {
        let mut guard = self.state.lock().unwrap();
        let stored = guard
            .objects
            .entry((workspace_id, object_type.clone()))
            .or_default();

        for object in objects {
            stored.insert(object.artifact_id, object);
        }
    }

    /// Teaches the service how to evaluate a textual condition
    pub fn register_condition(
        &self,
        condition: impl Into<String>,
        predicate: impl Fn(&QueryObject) -> bool + Send + Sync + 'static,
    ) {
        let mut guard = self.state.lock().unwrap();
        guard
            .conditions
            .insert(condition.into(), Arc::new(predicate));
    }

    /// Makes the `call_number`-th call (1-based, counting all calls) fail
    pub fn fail_call(&self, call_number: usize) {
        let mut guard = self.state.lock().unwrap();
        guard.failing_calls.insert(call_number);
    }

    pub fn calls(&self) -> Vec<RecordedQueryCall> {
        let guard = self.state.lock().unwrap();
        guard.calls.clone()
    }

    pub fn clear_calls(&self) {
        let mut guard = self.state.lock().unwrap();
        guard.calls.clear();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl ObjectQueryService for InMemoryObjectQueryService {
    async fn query(
        &self,
        workspace_id: WorkspaceId,
        request: &QueryRequest,
        start: usize,
        length: usize,
    ) -> Result<QueryResultPage, InternalError> {
        let mut guard = self.state.lock().unwrap();

        guard.calls.push(RecordedQueryCall {
            workspace_id,
            request: request.clone(),
            start,
            length,
        });
        let call_number = guard.calls.len();

        if guard.failing_calls.contains(&call_number) {
            return Err(SimulatedTransportError { call_number }.int_err());
        }
        if start == 0 {
            return Err(InvalidStartError.int_err());
        }

        let matcher = ConditionMatcher::resolve(request.condition.as_deref(), &guard.conditions)?;

        let mut matching = guard
            .objects
            .get(&(workspace_id, request.object_type.clone()))
            .map(|stored| {
                stored
                    .values()
                    .filter(|object| matcher.matches(object))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        // Stable sort, so artifact id order breaks ties
        if !request.sorts.is_empty() {
            matching.sort_by(|a, b| compare_by_sorts(a, b, &request.sorts));
        }

        let total_count = matching.len();
        let objects = matching
            .into_iter()
            .skip(start - 1)
            .take(length)
            .map(|object| project(object, &request.fields))
            .collect::<Vec<_>>();

        tracing::trace!(
            %workspace_id,
            start,
            length,
            result_count = objects.len(),
            total_count,
            "In-memory query served"
        );

        Ok(QueryResultPage::new(objects, total_count))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

enum ConditionMatcher {
    All,
    ArtifactIds(HashSet<ArtifactId>),
    Predicate(ObjectPredicate),
}

impl ConditionMatcher {
    fn resolve(
        condition: Option<&str>,
        registered: &HashMap<String, ObjectPredicate>,
    ) -> Result<Self, InternalError> {
        let Some(condition) = condition else {
            return Ok(Self::All);
        };

        if let Some(ids) = parse_artifact_id_membership(condition)? {
            return Ok(Self::ArtifactIds(ids));
        }

        match registered.get(condition) {
            Some(predicate) => Ok(Self::Predicate(predicate.clone())),
            None => Err(UnsupportedConditionError {
                condition: condition.to_string(),
            }
            .int_err()),
        }
    }

    fn matches(&self, object: &QueryObject) -> bool {
        match self {
            Self::All => true,
            Self::ArtifactIds(ids) => ids.contains(&object.artifact_id),
            Self::Predicate(predicate) => predicate(object),
        }
    }
}

/// Parses `('Artifact ID' IN (1,2,3))`, returns `None` for other conditions
fn parse_artifact_id_membership(
    condition: &str,
) -> Result<Option<HashSet<ArtifactId>>, InternalError> {
    let prefix = format!("('{ARTIFACT_ID_FIELD_NAME}' IN (");

    let Some(list) = condition
        .trim()
        .strip_prefix(prefix.as_str())
        .and_then(|rest| rest.strip_suffix("))"))
    else {
        return Ok(None);
    };

    list.split(',')
        .map(|id| {
            id.trim()
                .parse::<i32>()
                .map(ArtifactId::new)
                .map_err(|_| {
                    UnsupportedConditionError {
                        condition: condition.to_string(),
                    }
                    .int_err()
                })
        })
        .collect::<Result<HashSet<_>, _>>()
        .map(Some)
}

fn compare_by_sorts(a: &QueryObject, b: &QueryObject, sorts: &[Sort]) -> Ordering {
    for sort in sorts {
        let ordering = compare_values(a.value(&sort.field), b.value(&sort.field));
        let ordering = match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

// Missing values and nulls sort first
fn compare_values(a: Option<&serde_json::Value>, b: Option<&serde_json::Value>) -> Ordering {
    use serde_json::Value;

    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(a), Some(b)) => a.to_string().cmp(&b.to_string()),
    }
}

fn project(object: &QueryObject, fields: &[FieldRef]) -> QueryObject {
    QueryObject {
        artifact_id: object.artifact_id,
        field_values: fields
            .iter()
            .map(|field| FieldValuePair {
                field: field.clone(),
                value: object
                    .value(field)
                    .cloned()
                    .unwrap_or(serde_json::Value::Null),
            })
            .collect(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("Simulated transport failure on call #{call_number}")]
pub struct SimulatedTransportError {
    pub call_number: usize,
}

#[derive(Error, Debug)]
#[error("Unsupported condition: {condition}")]
pub struct UnsupportedConditionError {
    pub condition: String,
}

#[derive(Error, Debug)]
#[error("Start offset is 1-based, got 0")]
pub struct InvalidStartError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
