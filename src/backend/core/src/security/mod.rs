//! Security role model for the search-cluster role management API.
//!
//! This module provides:
//! - **Privileges**: the closed `ClusterPrivilege` and `IndexPrivilege` vocabularies
//! - **Models**: `Role` and its index-scoped `IndexPrivilegeGroup` grants
//! - **Built-in Roles**: the roles a cluster ships with, as ready-made `Role` values
//!
//! The model is plain data. Privileges are stored as strings so documents
//! round-trip unchanged; check them with [`crate::validation::RoleValidator`].
//!
//! # Usage
//!
//! ```rust
//! use esrest_core::security::{ClusterPrivilege, IndexPrivilegeGroup, Role};
//!
//! let role = Role::named("read_only")
//!     .with_cluster_privilege(["monitor"])
//!     .with_index_privilege_group(vec![
//!         IndexPrivilegeGroup::new()
//!             .with_index(["logs-*"])
//!             .with_privilege(["read"]),
//!     ]);
//!
//! assert_eq!(role.cluster_privileges().unwrap(), vec![ClusterPrivilege::Monitor]);
//! assert!(ClusterPrivilege::is_valid("manage_security"));
//! assert!(!ClusterPrivilege::is_valid("manage_securty"));
//! ```

pub mod models;
pub mod privileges;
pub mod roles;

pub use models::{IndexPrivilegeGroup, Role};
pub use privileges::{ClusterPrivilege, IndexPrivilege, PrivilegeSet, UnknownPrivilege};
pub use roles::BuiltinRole;
