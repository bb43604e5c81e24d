use super::{lock, Mock, State};
use rel_core::Error;

use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// Handle to a registered expectation.
///
/// Every method updates the expectation in place and hands the handle
/// back, so calls chain: `.returns(1i64).once()`.
pub struct Expect<R> {
    state: Arc<Mutex<State>>,
    select: fn(&mut State) -> &mut Vec<Mock<R>>,
    index: usize,
}

impl<R> Expect<R> {
    pub(super) fn new(
        state: Arc<Mutex<State>>,
        select: fn(&mut State) -> &mut Vec<Mock<R>>,
        index: usize,
    ) -> Expect<R> {
        Expect {
            state,
            select,
            index,
        }
    }

    /// Sets the value returned by matching calls.
    pub fn returns(self, value: impl Into<R>) -> Self {
        let value = value.into();
        self.update(|mock| mock.ret = Ok(value))
    }

    /// Makes matching calls fail with `err`.
    pub fn error(self, err: Error) -> Self {
        self.update(|mock| mock.ret = Err(err))
    }

    pub fn connection_closed(self) -> Self {
        self.error(Error::connection_closed())
    }

    /// Answers at most `times` calls, and expects exactly that many.
    pub fn times(self, times: usize) -> Self {
        self.update(|mock| mock.assert.times(times))
    }

    pub fn once(self) -> Self {
        self.times(1)
    }

    pub fn twice(self) -> Self {
        self.times(2)
    }

    /// The expectation may go uncalled.
    pub fn maybe(self) -> Self {
        self.update(|mock| mock.assert.maybe())
    }

    fn update(self, f: impl FnOnce(&mut Mock<R>)) -> Self {
        {
            let mut state = lock(&self.state);
            if let Some(mock) = (self.select)(&mut *state).get_mut(self.index) {
                f(mock);
            }
        }

        self
    }
}

impl<R> fmt::Debug for Expect<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut state = lock(&self.state);
        let call = (self.select)(&mut *state)
            .get(self.index)
            .map(|mock| mock.call.expect_string());

        f.debug_struct("Expect").field("call", &call).finish()
    }
}
