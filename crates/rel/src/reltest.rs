//! An expectation-based [`Adapter`] for testing code that uses a
//! [`Repository`](crate::Repository).
//!
//! ```ignore
//! let adapter = MockAdapter::new();
//! adapter.expect_insert("users", mutation).returns(1i64).once();
//!
//! let repo = Repository::builder().adapter(adapter.clone()).build()?;
//! repo.insert(&mut user).await?;
//!
//! adapter.assert_expectations()?;
//! ```

mod assert;
use assert::Assert;

mod call;
use call::Call;

mod expect;
pub use expect::Expect;

use rel_core::{adapter::Adapter, mutation::Mutation, stmt::Value, Error, Result};

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

/// Answers adapter calls from registered expectations.
///
/// Clones share their expectations, so a test can keep one handle and give
/// another to the repository.
///
/// Calls are matched against expectations in registration order using
/// structural [`Mutation`] equality. A call matching none of them fails
/// with an [`Error::not_mocked`] diagnostic.
#[derive(Debug, Clone, Default)]
pub struct MockAdapter {
    state: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    inserts: Vec<Mock<Value>>,
    updates: Vec<Mock<u64>>,
}

impl State {
    fn inserts(&mut self) -> &mut Vec<Mock<Value>> {
        &mut self.inserts
    }

    fn updates(&mut self) -> &mut Vec<Mock<u64>> {
        &mut self.updates
    }
}

#[derive(Debug)]
struct Mock<R> {
    call: Call,
    ret: Result<R>,
    assert: Assert,
}

impl MockAdapter {
    pub fn new() -> MockAdapter {
        MockAdapter::default()
    }

    /// Expects `insert(table, mutation)`. Returns `Value::Null` unless told
    /// otherwise.
    pub fn expect_insert(&self, table: &str, mutation: Mutation) -> Expect<Value> {
        let call = Call::Insert {
            table: table.to_string(),
            mutation,
        };

        self.register(State::inserts, call)
    }

    /// Expects `update(table, key_column, key, mutation)`. Reports one
    /// affected row unless told otherwise.
    pub fn expect_update(
        &self,
        table: &str,
        key_column: &str,
        key: impl Into<Value>,
        mutation: Mutation,
    ) -> Expect<u64> {
        let call = Call::Update {
            table: table.to_string(),
            key_column: key_column.to_string(),
            key: key.into(),
            mutation,
        };

        let expect = self.register(State::updates, call);
        expect.returns(1u64)
    }

    /// Fails when an expectation was not called as often as it asked for.
    pub fn assert_expectations(&self) -> Result<()> {
        let state = self.lock();

        let failures: Vec<String> = state
            .inserts
            .iter()
            .map(|mock| mock.assert.check(&mock.call))
            .chain(state.updates.iter().map(|mock| mock.assert.check(&mock.call)))
            .filter_map(|failure| failure.err())
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(rel_core::err!("{}", failures.join("\n")))
        }
    }

    fn register<R: Default>(
        &self,
        select: fn(&mut State) -> &mut Vec<Mock<R>>,
        call: Call,
    ) -> Expect<R> {
        let mut state = self.lock();
        let mocks = select(&mut *state);

        mocks.push(Mock {
            call,
            ret: Ok(R::default()),
            assert: Assert::default(),
        });

        Expect::new(self.state.clone(), select, mocks.len() - 1)
    }

    fn execute<R: Clone>(&self, select: fn(&mut State) -> &mut Vec<Mock<R>>, call: Call) -> Result<R> {
        let mut state = self.lock();
        let mocks = select(&mut *state);

        for mock in mocks.iter_mut() {
            if mock.call == call && mock.assert.call() {
                trace!(target: "rel::reltest", %call, "matched mock");
                return mock.ret.clone();
            }
        }

        let available: String = mocks
            .iter()
            .map(|mock| format!("\n\t{}", mock.call.expect_string()))
            .collect();

        Err(Error::not_mocked(format!(
            "FAIL: this call is not mocked:\n\t{}\nMaybe try adding mock:\t\n{}\n\nAvailable mocks:{}",
            call,
            call.expect_string(),
            available
        )))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        lock(&self.state)
    }
}

/// Poisoning is ignored; a failed assertion in another test thread leaves
/// the expectations intact.
fn lock(state: &Mutex<State>) -> MutexGuard<'_, State> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Adapter for MockAdapter {
    async fn insert(&self, table: &str, mutation: &Mutation) -> Result<Value> {
        let call = Call::Insert {
            table: table.to_string(),
            mutation: mutation.clone(),
        };

        self.execute(State::inserts, call)
    }

    async fn update(
        &self,
        table: &str,
        key_column: &str,
        key: &Value,
        mutation: &Mutation,
    ) -> Result<u64> {
        let call = Call::Update {
            table: table.to_string(),
            key_column: key_column.to_string(),
            key: key.clone(),
            mutation: mutation.clone(),
        };

        self.execute(State::updates, call)
    }
}
