//! In-memory test doubles for the node store, blob store, and captioner.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use cloudnest_core::error::AppError;
use cloudnest_core::result::AppResult;
use cloudnest_core::traits::{BlobHandle, BlobStore, Captioner};
use cloudnest_core::types::NodeFilter;
use cloudnest_database::store::NodeStore;
use cloudnest_entity::node::{CreateNode, Node, NodePatch};
use cloudnest_service::RequestContext;
use cloudnest_service::node::{LifecycleService, QueryService, UploadService};

pub fn ctx(owner: &str) -> RequestContext {
    RequestContext::new(owner)
}

/// Services wired over shared in-memory doubles.
pub struct TestEnv {
    pub store: std::sync::Arc<MemoryNodeStore>,
    pub blobs: std::sync::Arc<RecordingBlobStore>,
    pub captioner: std::sync::Arc<StubCaptioner>,
    pub lifecycle: LifecycleService,
    pub query: QueryService,
    pub uploads: UploadService,
}

impl TestEnv {
    pub fn new() -> Self {
        use std::sync::Arc;

        let store = Arc::new(MemoryNodeStore::new());
        let blobs = Arc::new(RecordingBlobStore::new());
        let captioner = Arc::new(StubCaptioner::default());

        let node_store: Arc<dyn NodeStore> = store.clone();
        let blob_store: Arc<dyn BlobStore> = blobs.clone();
        let cap: Arc<dyn Captioner> = captioner.clone();

        Self {
            lifecycle: LifecycleService::new(node_store.clone(), blob_store.clone()),
            query: QueryService::new(node_store.clone()),
            uploads: UploadService::new(node_store, blob_store, Some(cap)),
            store,
            blobs,
            captioner,
        }
    }

    /// Seed a folder directly through the store.
    pub async fn seed_folder(&self, owner: &str, name: &str, parent_id: Option<Uuid>) -> Node {
        self.store
            .create(&CreateNode::folder(owner, name, parent_id))
            .await
            .unwrap()
    }

    /// Seed a file record directly through the store, with a fake blob ref.
    pub async fn seed_file(&self, owner: &str, name: &str, parent_id: Option<Uuid>) -> Node {
        self.seed_file_described(owner, name, parent_id, None).await
    }

    pub async fn seed_file_described(
        &self,
        owner: &str,
        name: &str,
        parent_id: Option<Uuid>,
        description: Option<&str>,
    ) -> Node {
        self.store
            .create(&CreateNode {
                owner_id: owner.to_owned(),
                parent_id,
                name: name.to_owned(),
                is_folder: false,
                size_bytes: 42,
                mime_type: Some("text/plain".to_owned()),
                content_ref: Some(format!("blob://seed/{}", Uuid::new_v4())),
                thumbnail_ref: None,
                description: description.map(str::to_owned),
            })
            .await
            .unwrap()
    }
}

/// HashMap-backed [`NodeStore`] with the same owner-scoping and filter
/// semantics as the Postgres store.
#[derive(Debug, Default)]
pub struct MemoryNodeStore {
    nodes: Mutex<HashMap<Uuid, Node>>,
}

impl MemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: Uuid) -> Option<Node> {
        self.nodes.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.nodes.lock().unwrap().len()
    }

    fn matches(node: &Node, owner_id: &str, filter: &NodeFilter) -> bool {
        if node.owner_id != owner_id {
            return false;
        }
        match filter {
            NodeFilter::ActiveRoot => !node.is_trash && node.parent_id.is_none(),
            NodeFilter::ActiveIn(parent) => !node.is_trash && node.parent_id == Some(*parent),
            NodeFilter::Starred => node.is_starred && !node.is_trash,
            NodeFilter::Trash => node.is_trash,
            NodeFilter::Search(term) => {
                let term = term.to_lowercase();
                !node.is_trash
                    && (node.name.to_lowercase().contains(&term)
                        || node
                            .description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(&term)))
            }
        }
    }
}

#[async_trait]
impl NodeStore for MemoryNodeStore {
    async fn create(&self, data: &CreateNode) -> AppResult<Node> {
        let mut nodes = self.nodes.lock().unwrap();

        if let Some(parent_id) = data.parent_id {
            let parent_ok = nodes
                .get(&parent_id)
                .is_some_and(|p| p.owner_id == data.owner_id && p.is_folder);
            if !parent_ok {
                return Err(AppError::invalid_parent(format!(
                    "Parent {parent_id} is not a folder owned by the caller"
                )));
            }
        }

        let now = Utc::now();
        let node = Node {
            id: Uuid::new_v4(),
            owner_id: data.owner_id.clone(),
            parent_id: data.parent_id,
            name: data.name.clone(),
            is_folder: data.is_folder,
            size_bytes: data.size_bytes,
            mime_type: data.mime_type.clone(),
            content_ref: data.content_ref.clone(),
            thumbnail_ref: data.thumbnail_ref.clone(),
            description: data.description.clone(),
            is_starred: false,
            is_trash: false,
            trashed_at: None,
            created_at: now,
            updated_at: now,
        };
        nodes.insert(node.id, node.clone());
        Ok(node)
    }

    async fn find_by_id(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>> {
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .get(&id)
            .filter(|n| n.owner_id == owner_id)
            .cloned())
    }

    async fn update(&self, owner_id: &str, id: Uuid, patch: &NodePatch) -> AppResult<Option<Node>> {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(node) = nodes.get_mut(&id).filter(|n| n.owner_id == owner_id) else {
            return Ok(None);
        };
        if let Some(name) = &patch.name {
            node.name = name.clone();
        }
        if let Some(description) = &patch.description {
            node.description = Some(description.clone());
        }
        node.updated_at = Utc::now();
        Ok(Some(node.clone()))
    }

    async fn set_starred(
        &self,
        owner_id: &str,
        id: Uuid,
        starred: bool,
    ) -> AppResult<Option<Node>> {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(node) = nodes.get_mut(&id).filter(|n| n.owner_id == owner_id) else {
            return Ok(None);
        };
        node.is_starred = starred;
        node.updated_at = Utc::now();
        Ok(Some(node.clone()))
    }

    async fn list_children(
        &self,
        owner_id: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Node>> {
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .values()
            .filter(|n| n.owner_id == owner_id && n.parent_id == parent_id)
            .cloned()
            .collect())
    }

    async fn list_by_filter(&self, owner_id: &str, filter: &NodeFilter) -> AppResult<Vec<Node>> {
        Ok(self
            .nodes
            .lock()
            .unwrap()
            .values()
            .filter(|n| Self::matches(n, owner_id, filter))
            .cloned()
            .collect())
    }

    async fn trash_many(
        &self,
        owner_id: &str,
        ids: &[Uuid],
        trashed_at: DateTime<Utc>,
    ) -> AppResult<u64> {
        let mut nodes = self.nodes.lock().unwrap();
        let mut affected = 0;
        for id in ids {
            if let Some(node) = nodes.get_mut(id).filter(|n| n.owner_id == owner_id) {
                node.is_trash = true;
                node.trashed_at = Some(trashed_at);
                node.updated_at = trashed_at;
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn restore(&self, owner_id: &str, id: Uuid) -> AppResult<Option<Node>> {
        let mut nodes = self.nodes.lock().unwrap();
        let Some(node) = nodes
            .get_mut(&id)
            .filter(|n| n.owner_id == owner_id && n.is_trash)
        else {
            return Ok(None);
        };
        node.is_trash = false;
        node.trashed_at = None;
        node.updated_at = Utc::now();
        Ok(Some(node.clone()))
    }

    async fn restore_all(&self, owner_id: &str) -> AppResult<u64> {
        let mut nodes = self.nodes.lock().unwrap();
        let mut affected = 0;
        for node in nodes.values_mut() {
            if node.owner_id == owner_id && node.is_trash {
                node.is_trash = false;
                node.trashed_at = None;
                node.updated_at = Utc::now();
                affected += 1;
            }
        }
        Ok(affected)
    }

    async fn find_trashed(&self, owner_id: &str) -> AppResult<Vec<Node>> {
        self.list_by_filter(owner_id, &NodeFilter::Trash).await
    }

    async fn delete(&self, owner_id: &str, id: Uuid) -> AppResult<bool> {
        let mut nodes = self.nodes.lock().unwrap();
        let owned = nodes.get(&id).is_some_and(|n| n.owner_id == owner_id);
        if owned {
            nodes.remove(&id);
        }
        Ok(owned)
    }

    async fn delete_many(&self, owner_id: &str, ids: &[Uuid]) -> AppResult<u64> {
        let mut nodes = self.nodes.lock().unwrap();
        let mut affected = 0;
        for id in ids {
            if nodes.get(id).is_some_and(|n| n.owner_id == owner_id) {
                nodes.remove(id);
                affected += 1;
            }
        }
        Ok(affected)
    }
}

/// [`BlobStore`] double that records every call and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingBlobStore {
    pub uploads: Mutex<Vec<String>>,
    pub deletes: Mutex<Vec<String>>,
    pub bulk_deletes: Mutex<Vec<Vec<String>>>,
    pub fail_uploads: AtomicBool,
    pub fail_deletes: AtomicBool,
}

impl RecordingBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bulk_delete_calls(&self) -> Vec<Vec<String>> {
        self.bulk_deletes.lock().unwrap().clone()
    }

    pub fn deleted_refs(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for RecordingBlobStore {
    fn provider_type(&self) -> &str {
        "recording"
    }

    async fn upload(&self, data: Bytes, name: &str, _folder_hint: &str) -> AppResult<BlobHandle> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(AppError::storage("upload failed"));
        }
        let content_ref = format!("blob://{name}/{}", Uuid::new_v4());
        self.uploads.lock().unwrap().push(content_ref.clone());
        Ok(BlobHandle {
            content_ref,
            thumbnail_ref: None,
            size_bytes: data.len() as i64,
        })
    }

    async fn delete(&self, content_ref: &str) -> AppResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::storage("delete failed"));
        }
        self.deletes.lock().unwrap().push(content_ref.to_owned());
        Ok(())
    }

    async fn bulk_delete(&self, content_refs: &[String]) -> AppResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(AppError::storage("bulk delete failed"));
        }
        self.bulk_deletes
            .lock()
            .unwrap()
            .push(content_refs.to_vec());
        Ok(())
    }
}

/// [`Captioner`] double returning canned responses.
#[derive(Debug)]
pub struct StubCaptioner {
    pub caption_text: String,
    pub fail_captions: AtomicBool,
    pub image_bytes: Bytes,
}

impl Default for StubCaptioner {
    fn default() -> Self {
        Self {
            caption_text: "a photo of a test fixture".to_owned(),
            fail_captions: AtomicBool::new(false),
            image_bytes: Bytes::from_static(b"\x89PNG fake image bytes"),
        }
    }
}

#[async_trait]
impl Captioner for StubCaptioner {
    async fn caption(&self, _content_ref: &str) -> AppResult<String> {
        if self.fail_captions.load(Ordering::SeqCst) {
            return Err(AppError::external_service("caption provider unavailable"));
        }
        Ok(self.caption_text.clone())
    }

    async fn generate_image(&self, _prompt: &str) -> AppResult<Bytes> {
        Ok(self.image_bytes.clone())
    }
}
