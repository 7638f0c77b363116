//! Production-friendly observability hooks for topic selection and question exchanges.
//!
//! ```rust
//! use sobserve::{MetricsExchangeHooks, SafeExchangeHooks, TracingExchangeHooks};
//!
//! let _exchange_hooks = SafeExchangeHooks::new(TracingExchangeHooks);
//! let _metrics = MetricsExchangeHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsExchangeHooks;
pub use safe_hooks::SafeExchangeHooks;
pub use tracing_hooks::TracingExchangeHooks;

pub mod prelude {
    pub use crate::{MetricsExchangeHooks, SafeExchangeHooks, TracingExchangeHooks};
}

#[cfg(test)]
mod tests;
