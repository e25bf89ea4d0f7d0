//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule for maintainability.

pub mod create;
pub mod docs;
pub mod init;

pub use create::{execute_create, CreateOptions};
pub use docs::{execute_docs, DocsOptions};
pub use init::{execute_init, InitOptions};
