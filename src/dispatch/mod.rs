//! Intent dispatch: remote effects and the events they produce.

mod clock;
mod dispatcher;
mod error;
mod policy;

pub use clock::{Clock, SystemClock};
pub use dispatcher::IntentDispatcher;
pub use error::DispatchError;
pub use policy::FailurePolicy;
