pub(crate) mod state;
pub(crate) mod store;

pub use state::{AdminScope, CreatorScope, RoleScope, SessionState, UserScope};
