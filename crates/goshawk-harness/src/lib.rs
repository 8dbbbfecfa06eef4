mod context;
mod error;
mod lifecycle;
mod report;

pub use context::ScenarioContext;
pub use error::{Error, Result};
pub use lifecycle::ScenarioLifecycle;
pub use report::{FileReporter, Reporter};
