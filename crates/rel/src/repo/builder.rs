use super::Repository;
use rel_core::{adapter::Adapter, Clock, Result, SystemClock};

use std::sync::Arc;

pub struct Builder<A> {
    adapter: Option<Arc<A>>,

    /// Source of `created_at` / `updated_at` values
    clock: Arc<dyn Clock>,

    /// Leave zero-valued fields out of mapped mutations
    skip_zero: bool,
}

impl<A: Adapter> Builder<A> {
    pub fn adapter(&mut self, adapter: A) -> &mut Self {
        self.adapter = Some(Arc::new(adapter));
        self
    }

    pub fn clock(&mut self, clock: Arc<dyn Clock>) -> &mut Self {
        self.clock = clock;
        self
    }

    pub fn skip_zero(&mut self, skip_zero: bool) -> &mut Self {
        self.skip_zero = skip_zero;
        self
    }

    pub fn build(&mut self) -> Result<Repository<A>> {
        let Some(adapter) = self.adapter.clone() else {
            rel_core::bail!("a repository requires an adapter");
        };

        Ok(Repository {
            adapter,
            clock: self.clock.clone(),
            skip_zero: self.skip_zero,
        })
    }
}

impl<A> Default for Builder<A> {
    fn default() -> Self {
        Builder {
            adapter: None,
            clock: Arc::new(SystemClock),
            skip_zero: false,
        }
    }
}
