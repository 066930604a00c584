//! Hosted document store client (Firestore REST API).
//!
//! Documents are addressed as
//! `{endpoint}/projects/{project}/databases/(default)/documents/{collection}`.
//! Field values use the typed JSON encoding (`stringValue`, `booleanValue`, ...).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use sl_core::document::{Document, FieldValue, Fields};
use sl_core::ports::{DocumentStorePort, IdentityPort};
use sl_core::{DocumentId, RemoteError, RemoteErrorKind};

use crate::http::{decode_error, transport_error, ProviderFailure};

pub const DEFAULT_FIRESTORE_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

const PAGE_SIZE: &str = "300";

#[derive(Debug, Deserialize)]
struct RawDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<RawDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        // int64 travels as a decimal string
        FieldValue::Integer(i) => json!({ "integerValue": i.to_string() }),
        FieldValue::Double(d) => json!({ "doubleValue": d }),
        FieldValue::String(s) => json!({ "stringValue": s }),
    }
}

/// Decode a typed value. Unsupported types (maps, arrays, timestamps, ...)
/// yield `None` and are dropped from the document.
fn decode_value(value: &Value) -> Option<FieldValue> {
    let (kind, inner) = value.as_object()?.iter().next()?;
    match kind.as_str() {
        "nullValue" => Some(FieldValue::Null),
        "booleanValue" => inner.as_bool().map(FieldValue::Bool),
        "integerValue" => match inner {
            Value::String(s) => s.parse().ok().map(FieldValue::Integer),
            other => other.as_i64().map(FieldValue::Integer),
        },
        "doubleValue" => inner.as_f64().map(FieldValue::Double),
        "stringValue" => inner.as_str().map(|s| FieldValue::String(s.to_string())),
        _ => None,
    }
}

fn encode_fields(fields: &Fields) -> Value {
    let map: Map<String, Value> = fields
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect();
    json!({ "fields": map })
}

fn decode_document(raw: RawDocument) -> Result<Document, RemoteError> {
    let id = raw
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            RemoteError::new(
                RemoteErrorKind::InvalidResponse,
                format!("document name has no id: {}", raw.name),
            )
        })?
        .to_string();

    let fields = raw
        .fields
        .iter()
        .filter_map(|(name, value)| decode_value(value).map(|v| (name.clone(), v)))
        .collect();

    Ok(Document::new(id, fields))
}

fn map_store_failure(failure: &ProviderFailure) -> RemoteError {
    let kind = match failure.rpc_status.as_deref() {
        Some("PERMISSION_DENIED") => RemoteErrorKind::PermissionDenied,
        Some("UNAUTHENTICATED") => RemoteErrorKind::Unauthenticated,
        Some("UNAVAILABLE") | Some("DEADLINE_EXCEEDED") => RemoteErrorKind::Network,
        _ => failure.status_kind(),
    };
    let err = RemoteError::new(kind, failure.message.clone());
    match &failure.rpc_status {
        Some(status) => err.with_code(format!(
            "firestore/{}",
            status.to_ascii_lowercase().replace('_', "-")
        )),
        None => err,
    }
}

pub struct FirestoreDocumentStore {
    client: Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    identity: Arc<dyn IdentityPort>,
}

impl FirestoreDocumentStore {
    /// An empty `endpoint` selects [`DEFAULT_FIRESTORE_ENDPOINT`].
    ///
    /// Requests carry the current user's id token when one is available.
    pub fn new(
        client: Client,
        endpoint: &str,
        project_id: impl Into<String>,
        api_key: impl Into<String>,
        identity: Arc<dyn IdentityPort>,
    ) -> Self {
        let endpoint = if endpoint.is_empty() {
            DEFAULT_FIRESTORE_ENDPOINT
        } else {
            endpoint
        };
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: api_key.into(),
            identity,
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.endpoint, self.project_id, collection
        )
    }

    async fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = if self.api_key.is_empty() {
            request
        } else {
            request.query(&[("key", self.api_key.as_str())])
        };

        match self.identity.current_user().await.and_then(|u| u.id_token) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .authorize(request)
            .await
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let failure = ProviderFailure::from_response(response).await;
            let err = map_store_failure(&failure);
            warn!(
                status = %failure.status,
                rpc_status = ?failure.rpc_status,
                "document store request rejected"
            );
            return Err(err);
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentStorePort for FirestoreDocumentStore {
    async fn add_document(&self, collection: &str, fields: Fields) -> Result<DocumentId, RemoteError> {
        let request = self
            .client
            .post(self.collection_url(collection))
            .json(&encode_fields(&fields));

        let raw: RawDocument = self
            .send(request)
            .await?
            .json()
            .await
            .map_err(decode_error)?;

        let document = decode_document(raw)?;
        debug!(collection, id = %document.id, "document created");
        Ok(document.id)
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, RemoteError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .get(self.collection_url(collection))
                .query(&[("pageSize", PAGE_SIZE)]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: ListResponse = self
                .send(request)
                .await?
                .json()
                .await
                .map_err(decode_error)?;

            for raw in page.documents {
                documents.push(decode_document(raw)?);
            }

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(collection, count = documents.len(), "documents listed");
        Ok(documents)
    }
}
