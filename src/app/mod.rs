//! Application layer: the dispatcher, the user directory, and static file
//! serving over the document root.

pub mod router;
pub mod static_files;
pub mod users;

pub use router::Router;
pub use users::{User, UserStore};
