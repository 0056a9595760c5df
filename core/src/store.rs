//! The seam between the screen and the remote todo store.
//!
//! # Design
//! The controller only ever sees `TodoStore`. `HttpTodoStore` implements it on
//! top of `TodoClient` and a host-supplied `Transport`, so the core still never
//! performs I/O itself. Snapshots are pushed through a `watch` channel: `None`
//! means no snapshot has arrived yet (loading), and every successful mutation
//! republishes the full list so the latest snapshot stays authoritative.
//!
//! List responses can arrive out of order when mutations overlap. Every
//! refresh takes a ticket before its GET, and the feed only accepts a list
//! whose ticket is newer than the one it last published.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{NewTodo, TodoId, TodoItem, UpdateTodo};

/// Remote operations the list controller delegates to. Each may fail.
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError>;
    async fn toggle(&self, id: TodoId) -> Result<(), ApiError>;
    async fn delete(&self, id: TodoId) -> Result<(), ApiError>;
    /// Replace the todo's text. Stores reject blank text with
    /// `ApiError::Validation`.
    async fn update(&self, id: TodoId, text: &str) -> Result<(), ApiError>;
}

/// Executes an `HttpRequest` on behalf of the core.
///
/// Non-2xx statuses must come back as `Ok` responses so `TodoClient` can
/// interpret them; `Err` is reserved for failures to reach the store at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The latest store snapshot, or `None` while still loading.
pub type Snapshot = Option<Vec<TodoItem>>;

/// Publisher side of the push-style snapshot stream.
#[derive(Clone)]
pub struct SnapshotFeed {
    inner: Arc<FeedInner>,
}

struct FeedInner {
    tx: watch::Sender<Snapshot>,
    /// Last ticket handed out.
    issued: AtomicU64,
    /// Ticket of the snapshot currently in `tx`.
    published: AtomicU64,
}

impl SnapshotFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            inner: Arc::new(FeedInner {
                tx,
                issued: AtomicU64::new(0),
                published: AtomicU64::new(0),
            }),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.tx.subscribe()
    }

    /// Reserve a place in publish order. Take it before fetching the list.
    pub fn ticket(&self) -> u64 {
        self.inner.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Publish unconditionally, as the newest snapshot.
    pub fn publish(&self, items: Vec<TodoItem>) {
        let ticket = self.ticket();
        self.publish_ticketed(ticket, items);
    }

    /// Publish `items` unless a list fetched later has already been
    /// published. Returns whether the snapshot was replaced.
    pub fn publish_ticketed(&self, ticket: u64, items: Vec<TodoItem>) -> bool {
        let published = &self.inner.published;
        // the closure runs under the channel's write lock
        self.inner.tx.send_if_modified(|snapshot| {
            if ticket <= published.load(Ordering::SeqCst) {
                tracing::debug!(ticket, "dropping stale todo snapshot");
                return false;
            }
            tracing::debug!(ticket, count = items.len(), "publishing todo snapshot");
            published.store(ticket, Ordering::SeqCst);
            *snapshot = Some(items);
            true
        })
    }

    pub fn current(&self) -> Snapshot {
        self.inner.tx.borrow().clone()
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// `TodoStore` backed by the store's HTTP API.
pub struct HttpTodoStore<T> {
    client: TodoClient,
    transport: T,
    feed: SnapshotFeed,
}

impl<T: Transport> HttpTodoStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: TodoClient::new(base_url),
            transport,
            feed: SnapshotFeed::new(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.feed.subscribe()
    }

    pub fn feed(&self) -> &SnapshotFeed {
        &self.feed
    }

    /// Fetch the full list and publish it, unless a refresh started later
    /// has already published. Returns the fetched list either way.
    pub async fn refresh(&self) -> Result<Vec<TodoItem>, ApiError> {
        let ticket = self.feed.ticket();
        let items = self.list().await?;
        self.feed.publish_ticketed(ticket, items.clone());
        Ok(items)
    }

    pub async fn create(&self, text: &str) -> Result<TodoItem, ApiError> {
        let req = self.client.build_create_todo(&NewTodo {
            text: text.to_string(),
        })?;
        let created = self.client.parse_create_todo(self.transport.execute(req).await?)?;
        self.republish().await;
        Ok(created)
    }

    /// A failed refresh does not fail the mutation that preceded it; the
    /// next successful refresh brings the snapshot back in line.
    async fn republish(&self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!(error = %e, "snapshot refresh after mutation failed");
        }
    }
}

#[async_trait]
impl<T: Transport> TodoStore for HttpTodoStore<T> {
    async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let req = self.client.build_list_todos();
        self.client.parse_list_todos(self.transport.execute(req).await?)
    }

    async fn toggle(&self, id: TodoId) -> Result<(), ApiError> {
        let req = self.client.build_toggle_todo(id);
        self.client.parse_toggle_todo(self.transport.execute(req).await?)?;
        self.republish().await;
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<(), ApiError> {
        let req = self.client.build_delete_todo(id);
        self.client.parse_delete_todo(self.transport.execute(req).await?)?;
        self.republish().await;
        Ok(())
    }

    async fn update(&self, id: TodoId, text: &str) -> Result<(), ApiError> {
        let req = self.client.build_update_todo(
            id,
            &UpdateTodo {
                text: text.to_string(),
            },
        )?;
        self.client.parse_update_todo(self.transport.execute(req).await?)?;
        self.republish().await;
        Ok(())
    }
}
