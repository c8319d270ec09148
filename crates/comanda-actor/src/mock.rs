//! # Mock Clients for Testing
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of expectations instead of a running actor. Use it to test an actor's hooks
//! against fake dependencies: e.g. run the real order actor while the table, menu and
//! notification actors are mocks.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, canned answers | real store |
//! | **Error injection** | `return_err` | needs a real failing state |
//! | **Use case** | hooks that call other resources | the resource itself, full system |
//!
//! ```rust,ignore
//! let mut menu = MockClient::<MenuItem>::new();
//! menu.expect_get(MenuItemId(1)).return_ok(Some(lomo_saltado));
//!
//! let menu_client = MenuClient::new(menu.client());
//! // ... drive the code under test ...
//! menu.verify();
//! ```
//!
//! Expectations are matched **in order**; a request that does not match the next
//! expectation panics the mock task, which surfaces as `ActorDropped` in the caller.
//!
//! For asserting on the raw request payloads use [`create_mock_client`] together with
//! [`expect_create`], [`expect_get`] and [`expect_action`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
                        assert_eq!(id, want, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "update called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) => {
                        assert_eq!(id, want, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R: 'static>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().unwrap().len()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a client whose requests arrive on the returned receiver, so a test can
/// inspect each payload and answer it by hand.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Waiter {
        id: u32,
        name: String,
        online: bool,
    }

    #[derive(Debug)]
    struct WaiterCreate {
        name: String,
    }

    #[derive(Debug)]
    enum WaiterAction {
        GoOnline,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("waiter error")]
    struct WaiterError;

    #[async_trait]
    impl ActorEntity for Waiter {
        type Id = u32;
        type Create = WaiterCreate;
        type Update = ();
        type Action = WaiterAction;
        type ActionResult = bool;
        type Context = ();
        type Error = WaiterError;

        fn from_create_params(id: u32, params: WaiterCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                online: false,
            })
        }

        async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: WaiterAction, _: &()) -> Result<bool, Self::Error> {
            self.online = true;
            Ok(true)
        }
    }

    fn ana() -> Waiter {
        Waiter {
            id: 1,
            name: "Ana".into(),
            online: true,
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client() {
        let (client, mut receiver) = create_mock_client::<Waiter>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(WaiterCreate {
                    name: "Carlos".into(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Carlos");
        responder.send(Ok(7)).unwrap();

        assert_eq!(create_task.await.unwrap().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_raw_get_and_action() {
        let (client, mut receiver) = create_mock_client::<Waiter>(10);

        let requests = tokio::spawn(async move {
            let found = client.get(1).await;
            let changed = client.perform_action(1, WaiterAction::GoOnline).await;
            (found, changed)
        });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, 1);
        responder.send(Ok(Some(ana()))).unwrap();

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 1);
        assert!(matches!(action, WaiterAction::GoOnline));
        responder.send(Ok(true)).unwrap();

        let (found, changed) = requests.await.unwrap();
        assert_eq!(found.unwrap(), Some(ana()));
        assert!(changed.unwrap());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Waiter>::new();
        mock.expect_create().return_ok(1);
        mock.expect_list().return_ok(vec![ana()]);
        mock.expect_action(1).return_ok(true);
        mock.expect_get(2).return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let id = client
            .create(WaiterCreate { name: "Ana".into() })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.list().await.unwrap(), vec![ana()]);
        assert!(client
            .perform_action(1, WaiterAction::GoOnline)
            .await
            .unwrap());
        assert!(matches!(
            client.get(2).await,
            Err(FrameworkError::ActorClosed)
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_remaining_counts_unused_expectations() {
        let mut mock = MockClient::<Waiter>::new();
        mock.expect_get(1).return_ok(None);
        assert_eq!(mock.remaining(), 1);
    }
}
