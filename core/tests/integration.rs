//! The list controller driving a live mock store.
//!
//! # Design
//! Starts the mock store on a random port and wires a `TodoListController`
//! to it through `HttpTodoStore` and a ureq-backed `Transport`. Verifies that
//! edits, toggles and confirmed deletes reach the store and come back in the
//! next snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use todo_screen::{
    ApiError, CommitOutcome, ConfirmChoice, ConfirmPrompt, ConfirmRequest, DeleteDecision,
    HttpMethod, HttpRequest, HttpResponse, HttpTodoStore, ListView, NoticeQueue, RowBody,
    ScreenView, Theme, TodoListController, TodoStore, Transport,
};

/// Executes requests with ureq on tokio's blocking pool.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses are
/// returned as data and interpreted by the core client.
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn execute_blocking(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let result = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    };
    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let agent = self.agent.clone();
        tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
    }
}

struct AlwaysDelete;

#[async_trait]
impl ConfirmPrompt for AlwaysDelete {
    async fn confirm(&self, _request: &ConfirmRequest) -> ConfirmChoice {
        ConfirmChoice::Delete
    }
}

/// Spawn the mock store on its own thread and return its base URL.
fn start_store() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_store::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn row_texts(view: ListView) -> Vec<String> {
    match view {
        ListView::Empty(_) => Vec::new(),
        ListView::Rows(rows) => rows
            .into_iter()
            .map(|row| match row.body {
                RowBody::ReadOnly { text, .. } => text,
                RowBody::Editing { draft, .. } => format!("[editing] {draft}"),
            })
            .collect(),
    }
}

#[tokio::test]
async fn controller_round_trips_through_live_store() {
    let store = Arc::new(HttpTodoStore::new(&start_store(), UreqTransport::new()));
    let notices = Arc::new(NoticeQueue::new());
    let controller = TodoListController::new(store.clone(), notices.clone(), Arc::new(AlwaysDelete));
    let theme = Theme::light();
    let snapshots = store.subscribe();

    // Step 1: nothing fetched yet, still loading.
    assert_eq!(controller.render_snapshot(&snapshots.borrow(), &theme), ScreenView::Loading);

    // Step 2: empty store renders the placeholder.
    store.refresh().await.unwrap();
    assert!(matches!(
        controller.render_snapshot(&snapshots.borrow(), &theme),
        ScreenView::List(ListView::Empty(_))
    ));

    // Step 3: seed three todos.
    for text in ["Buy milk", "Walk dog", "Call mom"] {
        store.create(text).await.unwrap();
    }
    let items = snapshots.borrow().clone().unwrap();
    assert_eq!(
        row_texts(controller.render(&items, &theme)),
        vec!["Buy milk", "Walk dog", "Call mom"]
    );

    // Step 4: blank commit is held back locally.
    controller.begin_edit(&items[0]);
    controller.change_draft("   ");
    assert_eq!(controller.commit_edit().await.unwrap(), CommitOutcome::Blank);
    assert_eq!(controller.editing_id(), Some(items[0].id));

    // Step 5: real commit is trimmed and persisted.
    controller.change_draft("  Buy milk 2%  ");
    assert_eq!(controller.commit_edit().await.unwrap(), CommitOutcome::Saved);
    assert_eq!(controller.editing_id(), None);
    let items = snapshots.borrow().clone().unwrap();
    assert_eq!(items[0].text, "Buy milk 2%");

    // Step 6: toggle shows up in the next snapshot.
    controller.toggle_item(items[1].id).await;
    let items = snapshots.borrow().clone().unwrap();
    assert!(items[1].is_completed);
    assert!(notices.is_empty());

    // Step 7: confirmed delete reaches the store.
    match controller.request_delete(items[2].id).await {
        DeleteDecision::Dispatched(handle) => handle.await.unwrap(),
        other => panic!("expected dispatch, got {other:?}"),
    }
    let items = store.refresh().await.unwrap();
    assert_eq!(
        row_texts(controller.render(&items, &theme)),
        vec!["Buy milk 2%", "Walk dog"]
    );
}

#[tokio::test]
async fn failed_remote_calls_surface_as_notices() {
    let store = Arc::new(HttpTodoStore::new(&start_store(), UreqTransport::new()));
    let notices = Arc::new(NoticeQueue::new());
    let controller = TodoListController::new(store.clone(), notices.clone(), Arc::new(AlwaysDelete));

    let doomed = store.create("Soon gone").await.unwrap();
    controller.begin_edit(&doomed);
    controller.change_draft("Edited after deletion");

    // Delete behind the controller's back.
    store.delete(doomed.id).await.unwrap();

    let err = controller.commit_edit().await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound));
    assert_eq!(controller.editing_id(), Some(doomed.id));
    assert_eq!(controller.draft().as_deref(), Some("Edited after deletion"));

    controller.toggle_item(doomed.id).await;

    let messages: Vec<_> = notices.drain().into_iter().map(|n| n.message).collect();
    assert_eq!(messages, vec!["Failed to update todo", "Failed to toggle todo"]);
}
