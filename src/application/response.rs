use crate::error::{PayrollError, Result};
use serde::Serialize;
use std::fmt;

/// Which of the two response channels fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => f.write_str("success"),
            Outcome::Failure => f.write_str("failure"),
        }
    }
}

type Callback<A, R> = Box<dyn FnOnce(A) -> R + Send>;

/// Routes the outcome of a use case into a delivery-specific callback.
///
/// `T` is the use case's success value, `E` its error and `R` whatever the
/// delivery mechanism produces (an HTTP response, a CSV row, ...). Reporting
/// consumes the dispatcher, so at most one callback ever fires.
pub struct ResponseDispatcher<T, E, R> {
    on_success: Option<Callback<T, R>>,
    on_failure: Option<Callback<E, R>>,
}

impl<T, E, R> Default for ResponseDispatcher<T, E, R> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_failure: None,
        }
    }
}

impl<T, E, R> ResponseDispatcher<T, E, R> {
    /// Creates a dispatcher with no callbacks registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher and lets `configure` register its callbacks.
    ///
    /// ```
    /// use payroll::application::response::ResponseDispatcher;
    ///
    /// let dispatcher = ResponseDispatcher::respond(|r| {
    ///     r.register_success(|msg: String| format!("ok: {msg}"))
    ///         .register_failure(|e: String| format!("error: {e}"));
    /// });
    /// assert_eq!(dispatcher.report_success("done".into()).unwrap(), "ok: done");
    /// ```
    pub fn respond(configure: impl FnOnce(&mut Self)) -> Self {
        let mut dispatcher = Self::new();
        configure(&mut dispatcher);
        dispatcher
    }

    /// Registers the success callback, replacing any earlier one.
    pub fn register_success(
        &mut self,
        callback: impl FnOnce(T) -> R + Send + 'static,
    ) -> &mut Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Registers the failure callback, replacing any earlier one.
    pub fn register_failure(
        &mut self,
        callback: impl FnOnce(E) -> R + Send + 'static,
    ) -> &mut Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    /// Invokes the success callback with `value`.
    ///
    /// Fails with [`PayrollError::CallbackNotRegistered`] if none was registered.
    pub fn report_success(self, value: T) -> Result<R> {
        let callback = self
            .on_success
            .ok_or(PayrollError::CallbackNotRegistered(Outcome::Success))?;
        Ok(callback(value))
    }

    /// Invokes the failure callback with `error`.
    ///
    /// Fails with [`PayrollError::CallbackNotRegistered`] if none was registered.
    pub fn report_failure(self, error: E) -> Result<R> {
        let callback = self
            .on_failure
            .ok_or(PayrollError::CallbackNotRegistered(Outcome::Failure))?;
        Ok(callback(error))
    }

    /// Sends a use case result to the matching callback.
    pub fn dispatch(self, outcome: std::result::Result<T, E>) -> Result<R> {
        match outcome {
            Ok(value) => self.report_success(value),
            Err(error) => self.report_failure(error),
        }
    }
}
