//! Shared Tokio runtime helper for integration tests.

use std::cell::RefCell;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Panics
///
/// Panics if the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> SharedRuntime {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new()
            .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
        runtime.set(SharedRuntime::new(created));
    }

    let shared_runtime = runtime
        .get()
        .unwrap_or_else(|| panic!("runtime not initialised after set"));

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    shared_runtime
}

/// Mounts `mock` on the scenario's server.
///
/// # Panics
///
/// Panics if the server has not been started.
pub fn mount(runtime: &SharedRuntime, server: &Slot<MockServer>, mock: Mock) {
    server
        .with_ref(|server| runtime.block_on(mock.mount(server)))
        .unwrap_or_else(|| panic!("mock server not initialised"));
}
