//! Role data model: `Role` and its index-scoped `IndexPrivilegeGroup` grants.
//!
//! Every list field is optional. `None` means the field is unset and is left
//! out of the serialized document; `Some(vec![])` is an explicit empty list.
//! Nothing is checked on construction or assignment; see
//! [`crate::validation::RoleValidator`] for the boundary check.

use serde::{Deserialize, Serialize};

use super::privileges::{parse_all, ClusterPrivilege, IndexPrivilege, UnknownPrivilege};

fn push_entry(list: &mut Option<Vec<String>>, value: impl Into<String>) {
    list.get_or_insert_with(Vec::new).push(value.into());
}

fn to_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Index Privilege Group
// ═══════════════════════════════════════════════════════════════════════════════

/// A grant of index privileges over a set of indices, optionally restricted
/// to a subset of document fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPrivilegeGroup {
    /// Target index names or patterns.
    #[serde(rename = "names", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<Vec<String>>,
    /// Index privilege names, expected to be [`IndexPrivilege`] members.
    #[serde(rename = "privileges", default, skip_serializing_if = "Option::is_none")]
    pub privilege: Option<Vec<String>>,
    /// Fields the grant is restricted to (field-level security).
    #[serde(rename = "fields", default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Vec<String>>,
}

impl IndexPrivilegeGroup {
    /// Create a group with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from index names and typed privileges.
    pub fn from_privileges<I, S>(indices: I, privileges: &[IndexPrivilege]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index: Some(to_strings(indices)),
            privilege: Some(privileges.iter().map(|p| p.as_str().to_string()).collect()),
            field: None,
        }
    }

    pub fn with_index<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index = Some(to_strings(indices));
        self
    }

    pub fn with_privilege<I, S>(mut self, privileges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.privilege = Some(to_strings(privileges));
        self
    }

    pub fn with_field<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field = Some(to_strings(fields));
        self
    }

    /// Append an index name, creating the list if unset.
    pub fn push_index(&mut self, index: impl Into<String>) {
        push_entry(&mut self.index, index);
    }

    /// Append a privilege, creating the list if unset.
    pub fn push_privilege(&mut self, privilege: impl Into<String>) {
        push_entry(&mut self.privilege, privilege);
    }

    /// Append a field name, creating the list if unset.
    pub fn push_field(&mut self, field: impl Into<String>) {
        push_entry(&mut self.field, field);
    }

    /// Parse the stored privilege strings.
    ///
    /// An unset list yields an empty vector.
    pub fn privileges(&self) -> Result<Vec<IndexPrivilege>, UnknownPrivilege> {
        parse_all(self.privilege.as_deref().unwrap_or_default())
    }

    /// Whether the grant restricts the visible fields.
    pub fn has_field_security(&self) -> bool {
        self.field.is_some()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Role
// ═══════════════════════════════════════════════════════════════════════════════

/// A named bundle of cluster privileges, index grants and run-as identities.
///
/// `name` is carried in the serialized document for convenience. The
/// security API itself takes the role name from the request path and keys
/// GET responses by it, so a request body built for that API should leave
/// `name` unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name, unique within the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Cluster privilege names, expected to be [`ClusterPrivilege`] members.
    #[serde(rename = "cluster", default, skip_serializing_if = "Option::is_none")]
    pub cluster_privilege: Option<Vec<String>>,
    /// Index-scoped grants owned by this role.
    #[serde(rename = "indices", default, skip_serializing_if = "Option::is_none")]
    pub index_privilege_group: Option<Vec<IndexPrivilegeGroup>>,
    /// Identities this role may impersonate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as: Option<Vec<String>>,
}

impl Role {
    /// Create a role with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a role with only the name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cluster_privilege<I, S>(mut self, privileges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cluster_privilege = Some(to_strings(privileges));
        self
    }

    /// Set the cluster privileges from typed values.
    pub fn with_cluster_privileges(mut self, privileges: &[ClusterPrivilege]) -> Self {
        self.cluster_privilege = Some(privileges.iter().map(|p| p.as_str().to_string()).collect());
        self
    }

    pub fn with_index_privilege_group(mut self, groups: Vec<IndexPrivilegeGroup>) -> Self {
        self.index_privilege_group = Some(groups);
        self
    }

    pub fn with_run_as<I, S>(mut self, identities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.run_as = Some(to_strings(identities));
        self
    }

    /// Append a cluster privilege, creating the list if unset.
    pub fn push_cluster_privilege(&mut self, privilege: impl Into<String>) {
        push_entry(&mut self.cluster_privilege, privilege);
    }

    /// Append an index grant, creating the list if unset.
    pub fn push_index_privilege_group(&mut self, group: IndexPrivilegeGroup) {
        self.index_privilege_group
            .get_or_insert_with(Vec::new)
            .push(group);
    }

    /// Append a run-as identity, creating the list if unset.
    pub fn push_run_as(&mut self, identity: impl Into<String>) {
        push_entry(&mut self.run_as, identity);
    }

    /// Parse the stored cluster privilege strings.
    ///
    /// An unset list yields an empty vector.
    pub fn cluster_privileges(&self) -> Result<Vec<ClusterPrivilege>, UnknownPrivilege> {
        parse_all(self.cluster_privilege.as_deref().unwrap_or_default())
    }

    /// Index grants as a slice; empty when unset.
    pub fn index_groups(&self) -> &[IndexPrivilegeGroup] {
        self.index_privilege_group.as_deref().unwrap_or_default()
    }

    /// True when no field has been assigned.
    pub fn is_unset(&self) -> bool {
        self.name.is_none()
            && self.cluster_privilege.is_none()
            && self.index_privilege_group.is_none()
            && self.run_as.is_none()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_is_unset() {
        let role = Role::new();
        assert!(role.name.is_none());
        assert!(role.cluster_privilege.is_none());
        assert!(role.index_privilege_group.is_none());
        assert!(role.run_as.is_none());
        assert!(role.is_unset());
    }

    #[test]
    fn test_new_group_is_unset() {
        let group = IndexPrivilegeGroup::new();
        assert!(group.index.is_none());
        assert!(group.privilege.is_none());
        assert!(group.field.is_none());
        assert!(!group.has_field_security());
    }

    #[test]
    fn test_assignment_accepts_unknown_privileges() {
        let mut role = Role::new();
        role.cluster_privilege = Some(vec!["monitor".into(), "not_a_privilege".into()]);
        assert_eq!(role.cluster_privilege.as_ref().unwrap().len(), 2);

        let err = role.cluster_privileges().unwrap_err();
        assert_eq!(err.value, "not_a_privilege");
    }

    #[test]
    fn test_push_creates_list() {
        let mut group = IndexPrivilegeGroup::new();
        group.push_index("logs-*");
        group.push_privilege("read");
        assert_eq!(group.index, Some(vec!["logs-*".to_string()]));
        assert_eq!(group.privileges().unwrap(), vec![IndexPrivilege::Read]);
        assert!(group.field.is_none());

        let mut role = Role::named("ops");
        role.push_index_privilege_group(group);
        role.push_run_as("alice");
        assert_eq!(role.index_groups().len(), 1);
        assert_eq!(role.run_as, Some(vec!["alice".to_string()]));
    }

    #[test]
    fn test_typed_builders() {
        let role = Role::named("monitor_logs")
            .with_cluster_privileges(&[ClusterPrivilege::Monitor])
            .with_index_privilege_group(vec![IndexPrivilegeGroup::from_privileges(
                ["logs-*"],
                &[IndexPrivilege::Read, IndexPrivilege::ViewIndexMetadata],
            )]);

        assert_eq!(role.cluster_privilege, Some(vec!["monitor".to_string()]));
        assert_eq!(
            role.index_groups()[0].privilege,
            Some(vec!["read".to_string(), "view_index_metadata".to_string()])
        );
    }

    #[test]
    fn test_typed_view_of_unset_list_is_empty() {
        let role = Role::new();
        assert!(role.cluster_privileges().unwrap().is_empty());
        assert!(role.index_groups().is_empty());
        assert!(IndexPrivilegeGroup::new().privileges().unwrap().is_empty());
    }

    #[test]
    fn test_unset_and_empty_serialize_differently() {
        let unset = Role::named("a");
        let empty = Role::named("a").with_run_as(Vec::<String>::new());

        assert_eq!(serde_json::to_string(&unset).unwrap(), r#"{"name":"a"}"#);
        assert_eq!(
            serde_json::to_string(&empty).unwrap(),
            r#"{"name":"a","run_as":[]}"#
        );
    }

    #[test]
    fn test_wire_field_names() {
        let role = Role::named("r")
            .with_cluster_privilege(["all"])
            .with_index_privilege_group(vec![IndexPrivilegeGroup::new()
                .with_index(["i"])
                .with_privilege(["read"])
                .with_field(["f"])]);

        let value = serde_json::to_value(&role).unwrap();
        assert_eq!(value["cluster"][0], "all");
        assert_eq!(value["indices"][0]["names"][0], "i");
        assert_eq!(value["indices"][0]["privileges"][0], "read");
        assert_eq!(value["indices"][0]["fields"][0], "f");
        assert!(value.get("run_as").is_none());
    }

    #[test]
    fn test_request_body_without_name() {
        let mut role = Role::named("ops").with_cluster_privilege(["monitor"]);
        let name = role.name.take().unwrap();

        assert_eq!(name, "ops");
        assert_eq!(serde_json::to_string(&role).unwrap(), r#"{"cluster":["monitor"]}"#);

        // A GET response body carries no name; it comes from the response key.
        let mut back: Role = serde_json::from_str(r#"{"cluster":["monitor"]}"#).unwrap();
        assert!(back.name.is_none());
        back.name = Some(name);
        assert_eq!(back, Role::named("ops").with_cluster_privilege(["monitor"]));
    }
}
