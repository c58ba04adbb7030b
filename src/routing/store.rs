//! Engine configuration store.
//!
//! The compiled route table is installed here exactly once, before the
//! engine accepts connections. After installation the table is read-only:
//! readers clone an `Arc` and need no further synchronization because no
//! writer exists.

use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::routing::table::RouteTable;

/// Error type for route table installation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallError {
    #[error("route table already installed")]
    AlreadyInstalled,
}

/// Install-once holder for the compiled route table.
#[derive(Debug, Default)]
pub struct RouteStore {
    table: OnceLock<Arc<RouteTable>>,
}

impl RouteStore {
    pub fn new() -> Self {
        Self {
            table: OnceLock::new(),
        }
    }

    /// Install the compiled table. Succeeds exactly once per process; the
    /// installation path is not re-entrant and never replaces an installed
    /// table.
    pub fn install(&self, table: RouteTable) -> Result<(), InstallError> {
        self.table
            .set(Arc::new(table))
            .map_err(|_| InstallError::AlreadyInstalled)
    }

    /// The installed table, if installation has happened.
    pub fn installed(&self) -> Option<Arc<RouteTable>> {
        self.table.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::table::CompiledRoute;

    fn table_with_upstream(upstream: &str) -> RouteTable {
        RouteTable {
            routes: vec![CompiledRoute {
                upstream_path_template: upstream.to_string(),
                downstream_path_template: upstream.to_string(),
                downstream_scheme: "http".to_string(),
                downstream_hosts: vec![],
            }],
        }
    }

    #[test]
    fn empty_until_installed() {
        let store = RouteStore::new();
        assert!(store.installed().is_none());
    }

    #[test]
    fn install_succeeds_exactly_once() {
        let store = RouteStore::new();

        store.install(table_with_upstream("/ads")).unwrap();

        let err = store.install(table_with_upstream("/other")).unwrap_err();
        assert_eq!(err, InstallError::AlreadyInstalled);

        // The first table is preserved.
        let installed = store.installed().unwrap();
        assert_eq!(installed.routes[0].upstream_path_template, "/ads");
    }

    #[test]
    fn readers_share_the_installed_table() {
        let store = RouteStore::new();
        store.install(table_with_upstream("/ads")).unwrap();

        let a = store.installed().unwrap();
        let b = store.installed().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
