pub mod deploy;
pub mod dispatcher;
pub mod orchestrator;
pub mod tsdb_schema;

pub use deploy::*;
pub use dispatcher::*;
pub use orchestrator::*;
