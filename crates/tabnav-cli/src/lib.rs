//! Library side of the `tabnav` binary: an in-memory host, the script
//! language and the session that replays one against the other.

pub mod host;
pub mod logging;
pub mod report;
pub mod script;
pub mod session;
pub mod summary;
