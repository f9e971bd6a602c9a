use std::sync::Arc;

use catalogo_infra::{InMemoryProductStore, ProductStore};
use catalogo_users::UserDirectory;

/// State shared by all handlers.
///
/// The catalog is owned here and handed to handlers explicitly; nothing lives in
/// globals, so each test can build its own isolated instance.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn ProductStore>,
    pub users: Arc<UserDirectory>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>, users: UserDirectory) -> Self {
        Self {
            products,
            users: Arc::new(users),
        }
    }

    /// Empty catalog (ids start at 1) and the seeded user directory.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()), UserDirectory::seeded())
    }
}
