use super::Call;

/// Call bookkeeping for one expectation.
#[derive(Debug, Default)]
pub(super) struct Assert {
    /// Number of calls answered; 0 means any number
    repeatability: usize,

    /// Whether the expectation may go uncalled
    optional: bool,

    calls: usize,
}

impl Assert {
    pub(super) fn times(&mut self, times: usize) {
        self.repeatability = times;
    }

    pub(super) fn maybe(&mut self) {
        self.optional = true;
    }

    /// Records a call, returning `false` once the expectation is used up.
    pub(super) fn call(&mut self) -> bool {
        if self.repeatability != 0 && self.calls >= self.repeatability {
            return false;
        }

        self.calls += 1;
        true
    }

    pub(super) fn check(&self, call: &Call) -> Result<(), String> {
        if self.optional && self.calls == 0 {
            return Ok(());
        }

        match self.repeatability {
            0 if self.calls > 0 => Ok(()),
            0 => Err(format!("FAIL: {} was never called", call.expect_string())),
            n if self.calls >= n => Ok(()),
            n => Err(format!(
                "FAIL: {} needs to be called {} more time(s)",
                call.expect_string(),
                n - self.calls
            )),
        }
    }
}
