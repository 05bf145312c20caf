pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web_storage::WebStore;

pub use models::{minute_precision, Project, Role, UserInfo};
pub use session::{Session, SessionStore, TOKEN_KEY, USER_KEY};
