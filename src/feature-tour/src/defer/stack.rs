use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// A unit of work registered on a [`DeferStack`]. Its inputs are already
/// evaluated and owned by the closure.
pub type DeferredAction<'scope> = Box<dyn FnOnce() + 'scope>;

/// Actions deferred until the owning scope ends.
///
/// Actions are appended while the scope runs and executed most recent first
/// when the stack is dropped, whether the scope finished normally, returned
/// early, or is unwinding from a panic. Each action runs exactly once.
///
/// # Example
/// ```
/// use feature_tour::defer::DeferStack;
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// {
///     let mut defers = DeferStack::new();
///     for i in 0..3 {
///         defers.defer_with(i, |i| log.borrow_mut().push(i));
///     }
/// }
/// assert_eq!(*log.borrow(), vec![2, 1, 0]);
/// ```
pub struct DeferStack<'scope> {
    actions: Vec<DeferredAction<'scope>>,
}

impl<'scope> DeferStack<'scope> {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Register an action to run when the scope ends.
    pub fn defer<F>(&mut self, action: F)
    where
        F: FnOnce() + 'scope,
    {
        self.actions.push(Box::new(action));
    }

    /// Register an action together with a value captured now.
    ///
    /// `captured` is evaluated at the call site and moved into the action, so
    /// later changes to the variable it came from are not observed.
    pub fn defer_with<T, F>(&mut self, captured: T, action: F)
    where
        T: 'scope,
        F: FnOnce(T) + 'scope,
    {
        self.defer(move || action(captured));
    }

    fn drain(&mut self) {
        let pending = self.actions.len();
        if pending > 0 {
            tracing::trace!(pending, "draining deferred actions");
        }

        let mut first_panic: Option<Box<dyn Any + Send>> = None;
        while let Some(action) = self.actions.pop() {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(action)) {
                tracing::debug!("deferred action panicked");
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            // Resuming while already unwinding would abort the process.
            if !std::thread::panicking() {
                panic::resume_unwind(payload);
            }
        }
    }
}

impl Default for DeferStack<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DeferStack<'_> {
    fn drop(&mut self) {
        self.drain();
    }
}

impl fmt::Debug for DeferStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferStack")
            .field("pending", &self.actions.len())
            .finish()
    }
}

/// Run `body` with a fresh [`DeferStack`].
///
/// The body's result is computed first, then every deferred action runs, then
/// the result is handed back to the caller.
pub fn scoped<'scope, R, F>(body: F) -> R
where
    F: FnOnce(&mut DeferStack<'scope>) -> R,
{
    let mut defers = DeferStack::new();
    let result = body(&mut defers);
    drop(defers);
    result
}
