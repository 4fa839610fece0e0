//! Drives the controller over real HTTP against the mock server.
//!
//! The server runs on its own runtime in a background thread on a random
//! port; the controller talks to it through `UreqTransport`.

use std::net::SocketAddr;

use todo_core::{
    Config, ListBody, ListView, Operation, RecordingDiagnostics, TodoClient, TodoId, TodoListController,
    UreqTransport,
};

fn start_mock_server() -> SocketAddr {
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
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

async fn controller_at(base_url: &str) -> TodoListController<UreqTransport, RecordingDiagnostics> {
    TodoListController::initialize(
        TodoClient::new(base_url),
        UreqTransport::new(),
        RecordingDiagnostics::new(),
    )
    .await
}

#[tokio::test]
async fn create_toggle_delete_lifecycle() {
    let addr = start_mock_server();
    let config = Config::from_lookup(|_| Some(format!("http://{addr}")));
    let mut controller = controller_at(&config.base_url).await;

    // Step 1: initial fetch — empty.
    assert!(controller.items().is_empty());
    assert!(!controller.is_loading());
    assert_eq!(ListView::new(controller.state()).body, ListBody::Empty);

    // Step 2: blank titles never reach the server.
    assert!(!controller.create_todo("   ", "ignored").await);

    // Step 3: create two; newest first.
    controller.set_draft_title("Buy milk");
    assert!(controller.submit_draft().await);
    assert!(controller.create_todo("Walk dog", "after lunch").await);
    let titles: Vec<_> = controller.items().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Walk dog", "Buy milk"]);
    assert_eq!(controller.items()[0].description.as_deref(), Some("after lunch"));
    assert!(controller.draft().title.is_empty());

    // Step 4: toggle the older one.
    let milk = controller.items()[1].id.clone();
    assert!(controller.toggle_completion(&milk, false).await);
    assert!(controller.items()[1].completed);
    assert!(!controller.items()[0].completed);

    // Step 5: a reload reflects the server's view.
    let before = controller.items().to_vec();
    assert!(controller.load_all().await);
    assert_eq!(controller.items(), before.as_slice());

    // Step 6: delete.
    assert!(controller.delete_todo(&milk).await);
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].title, "Walk dog");

    // Step 7: operations on a vanished record fail without touching state.
    let after_delete = controller.state().clone();
    assert!(!controller.toggle_completion(&milk, true).await);
    assert!(!controller.delete_todo(&milk).await);
    assert_eq!(controller.state(), &after_delete);

    let failures = controller.diagnostics().failures();
    assert_eq!(failures.len(), 2);
    assert_eq!(
        failures[1].operation,
        Operation::Delete { id: milk.clone() }
    );
    assert_eq!(failures[1].message, "resource not found");
}

#[tokio::test]
async fn unreachable_backend_leaves_state_empty() {
    // Bind then drop to get a port nobody listens on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let mut controller = controller_at(&format!("http://{addr}")).await;

    assert!(controller.items().is_empty());
    assert!(!controller.is_loading());

    assert!(!controller.create_todo("Offline", "").await);
    assert!(!controller.is_submitting());
    assert!(!controller.delete_todo(&TodoId::Number(1)).await);
    assert!(controller.items().is_empty());

    let operations: Vec<_> = controller
        .diagnostics()
        .failures()
        .into_iter()
        .map(|f| f.operation)
        .collect();
    assert_eq!(
        operations,
        [
            Operation::LoadAll,
            Operation::Create,
            Operation::Delete { id: TodoId::Number(1) }
        ]
    );
}
