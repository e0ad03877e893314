//! Built-in roles shipped with a Shield-era cluster.
//!
//! | Role             | Grants                                                     |
//! |------------------|------------------------------------------------------------|
//! | admin            | `all` on the cluster and on every index                    |
//! | power_user       | cluster `monitor`; `all` on every index                    |
//! | user             | `read` on every index                                      |
//! | transport_client | cluster `transport_client`                                 |
//! | kibana4_server   | cluster `monitor`; `all` on `.kibana`                      |
//! | logstash         | cluster `manage_index_templates`; writes to `logstash-*`   |

use super::models::{IndexPrivilegeGroup, Role};
use super::privileges::{ClusterPrivilege, IndexPrivilege};

/// Built-in role templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRole {
    Admin,
    PowerUser,
    User,
    TransportClient,
    Kibana4Server,
    Logstash,
}

impl BuiltinRole {
    /// Get the role name as registered on the cluster.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::PowerUser => "power_user",
            Self::User => "user",
            Self::TransportClient => "transport_client",
            Self::Kibana4Server => "kibana4_server",
            Self::Logstash => "logstash",
        }
    }

    /// Cluster privileges granted by this role.
    pub fn cluster_privileges(&self) -> Vec<ClusterPrivilege> {
        match self {
            Self::Admin => vec![ClusterPrivilege::All],
            Self::PowerUser | Self::Kibana4Server => vec![ClusterPrivilege::Monitor],
            Self::User => Vec::new(),
            Self::TransportClient => vec![ClusterPrivilege::TransportClient],
            Self::Logstash => vec![ClusterPrivilege::ManageIndexTemplates],
        }
    }

    /// Index grants of this role.
    pub fn index_groups(&self) -> Vec<IndexPrivilegeGroup> {
        match self {
            Self::Admin | Self::PowerUser => {
                vec![IndexPrivilegeGroup::from_privileges(["*"], &[IndexPrivilege::All])]
            }
            Self::User => {
                vec![IndexPrivilegeGroup::from_privileges(["*"], &[IndexPrivilege::Read])]
            }
            Self::TransportClient => Vec::new(),
            Self::Kibana4Server => {
                vec![IndexPrivilegeGroup::from_privileges([".kibana"], &[IndexPrivilege::All])]
            }
            Self::Logstash => vec![IndexPrivilegeGroup::from_privileges(
                ["logstash-*"],
                &[
                    IndexPrivilege::Write,
                    IndexPrivilege::Delete,
                    IndexPrivilege::CreateIndex,
                ],
            )],
        }
    }

    /// Build the full `Role` value.
    ///
    /// Lists a role does not use are left unset rather than empty.
    pub fn to_role(&self) -> Role {
        let mut role = Role::named(self.name());

        let cluster = self.cluster_privileges();
        if !cluster.is_empty() {
            role = role.with_cluster_privileges(&cluster);
        }

        let groups = self.index_groups();
        if !groups.is_empty() {
            role = role.with_index_privilege_group(groups);
        }

        role
    }

    /// Look up a built-in role by its cluster name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.name() == name)
    }

    /// Return all built-in roles.
    pub fn all() -> Vec<BuiltinRole> {
        vec![
            Self::Admin,
            Self::PowerUser,
            Self::User,
            Self::TransportClient,
            Self::Kibana4Server,
            Self::Logstash,
        ]
    }

    /// Return all built-in roles as `Role` values.
    pub fn all_roles() -> Vec<Role> {
        Self::all().into_iter().map(|r| r.to_role()).collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_has_everything() {
        let role = BuiltinRole::Admin.to_role();
        assert_eq!(role.name.as_deref(), Some("admin"));
        assert_eq!(role.cluster_privileges().unwrap(), vec![ClusterPrivilege::All]);
        assert_eq!(role.index_groups()[0].index, Some(vec!["*".to_string()]));
        assert_eq!(role.index_groups()[0].privileges().unwrap(), vec![IndexPrivilege::All]);
    }

    #[test]
    fn test_user_has_no_cluster_privileges() {
        let role = BuiltinRole::User.to_role();
        assert!(role.cluster_privilege.is_none());
        assert_eq!(role.index_groups()[0].privileges().unwrap(), vec![IndexPrivilege::Read]);
    }

    #[test]
    fn test_transport_client_has_no_indices() {
        let role = BuiltinRole::TransportClient.to_role();
        assert!(role.index_privilege_group.is_none());
        assert_eq!(
            role.cluster_privilege,
            Some(vec!["transport_client".to_string()])
        );
    }

    #[test]
    fn test_logstash_grants() {
        let role = BuiltinRole::Logstash.to_role();
        let group = &role.index_groups()[0];
        assert_eq!(group.index, Some(vec!["logstash-*".to_string()]));
        assert_eq!(
            group.privileges().unwrap(),
            vec![IndexPrivilege::Write, IndexPrivilege::Delete, IndexPrivilege::CreateIndex]
        );
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(BuiltinRole::from_name("kibana4_server"), Some(BuiltinRole::Kibana4Server));
        assert_eq!(BuiltinRole::from_name("superuser"), None);
    }

    #[test]
    fn test_all_roles() {
        let roles = BuiltinRole::all_roles();
        assert_eq!(roles.len(), 6);
        assert!(roles.iter().all(|r| r.name.is_some()));
        assert!(roles.iter().all(|r| r.run_as.is_none()));
    }
}
