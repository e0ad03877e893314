//! Closed privilege vocabularies understood by the security API.
//!
//! Role documents carry privileges as plain strings. The enumerations here
//! are the authoritative member sets those strings are checked against.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A string that is not a member of a privilege vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} privilege: {value:?}")]
pub struct UnknownPrivilege {
    /// Which vocabulary rejected the value ("cluster" or "index").
    pub vocabulary: &'static str,
    /// The rejected value, verbatim.
    pub value: String,
}

impl UnknownPrivilege {
    pub fn new(vocabulary: &'static str, value: impl Into<String>) -> Self {
        Self {
            vocabulary,
            value: value.into(),
        }
    }
}

/// Behaviour shared by the privilege vocabularies.
///
/// Lets validators and typed views work over either enumeration.
pub trait PrivilegeSet: Copy + FromStr<Err = UnknownPrivilege> + 'static {
    /// Vocabulary label used in error messages.
    const VOCABULARY: &'static str;

    /// Every member, in declaration order.
    fn members() -> &'static [Self];

    /// The wire string of this member.
    fn as_str(&self) -> &'static str;

    /// Check whether `value` names a member (case-sensitive).
    fn is_member(value: &str) -> bool {
        Self::members().iter().any(|p| p.as_str() == value)
    }

    /// Wire strings of every member.
    fn member_names() -> Vec<&'static str> {
        Self::members().iter().map(|p| p.as_str()).collect()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Cluster privileges
// ═══════════════════════════════════════════════════════════════════════════════

/// Cluster-wide administrative privilege.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClusterPrivilege {
    All,
    Monitor,
    Manage,
    ManageSecurity,
    ManageIndexTemplates,
    TransportClient,
}

impl ClusterPrivilege {
    /// Every cluster privilege, in declaration order.
    pub const ALL: [ClusterPrivilege; 6] = [
        Self::All,
        Self::Monitor,
        Self::Manage,
        Self::ManageSecurity,
        Self::ManageIndexTemplates,
        Self::TransportClient,
    ];

    /// Get the wire string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Monitor => "monitor",
            Self::Manage => "manage",
            Self::ManageSecurity => "manage_security",
            Self::ManageIndexTemplates => "manage_index_templates",
            Self::TransportClient => "transport_client",
        }
    }

    /// Check whether a raw string is a cluster privilege.
    pub fn is_valid(value: &str) -> bool {
        <Self as PrivilegeSet>::is_member(value)
    }
}

impl PrivilegeSet for ClusterPrivilege {
    const VOCABULARY: &'static str = "cluster";

    fn members() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        ClusterPrivilege::as_str(self)
    }
}

impl fmt::Display for ClusterPrivilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterPrivilege {
    type Err = UnknownPrivilege;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "monitor" => Ok(Self::Monitor),
            "manage" => Ok(Self::Manage),
            "manage_security" => Ok(Self::ManageSecurity),
            "manage_index_templates" => Ok(Self::ManageIndexTemplates),
            "transport_client" => Ok(Self::TransportClient),
            _ => Err(UnknownPrivilege::new(Self::VOCABULARY, s)),
        }
    }
}

impl From<ClusterPrivilege> for String {
    fn from(p: ClusterPrivilege) -> Self {
        p.as_str().to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Index privileges
// ═══════════════════════════════════════════════════════════════════════════════

/// Privilege over a specific index or index pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPrivilege {
    All,
    Manage,
    Monitor,
    ViewIndexMetadata,
    Read,
    Index,
    Create,
    Delete,
    Write,
    DeleteIndex,
    CreateIndex,
}

impl IndexPrivilege {
    /// Every index privilege, in declaration order.
    pub const ALL: [IndexPrivilege; 11] = [
        Self::All,
        Self::Manage,
        Self::Monitor,
        Self::ViewIndexMetadata,
        Self::Read,
        Self::Index,
        Self::Create,
        Self::Delete,
        Self::Write,
        Self::DeleteIndex,
        Self::CreateIndex,
    ];

    /// Get the wire string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Manage => "manage",
            Self::Monitor => "monitor",
            Self::ViewIndexMetadata => "view_index_metadata",
            Self::Read => "read",
            Self::Index => "index",
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Write => "write",
            Self::DeleteIndex => "delete_index",
            Self::CreateIndex => "create_index",
        }
    }

    /// Check whether a raw string is an index privilege.
    pub fn is_valid(value: &str) -> bool {
        <Self as PrivilegeSet>::is_member(value)
    }
}

impl PrivilegeSet for IndexPrivilege {
    const VOCABULARY: &'static str = "index";

    fn members() -> &'static [Self] {
        &Self::ALL
    }

    fn as_str(&self) -> &'static str {
        IndexPrivilege::as_str(self)
    }
}

impl fmt::Display for IndexPrivilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndexPrivilege {
    type Err = UnknownPrivilege;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "manage" => Ok(Self::Manage),
            "monitor" => Ok(Self::Monitor),
            "view_index_metadata" => Ok(Self::ViewIndexMetadata),
            "read" => Ok(Self::Read),
            "index" => Ok(Self::Index),
            "create" => Ok(Self::Create),
            "delete" => Ok(Self::Delete),
            "write" => Ok(Self::Write),
            "delete_index" => Ok(Self::DeleteIndex),
            "create_index" => Ok(Self::CreateIndex),
            _ => Err(UnknownPrivilege::new(Self::VOCABULARY, s)),
        }
    }
}

impl From<IndexPrivilege> for String {
    fn from(p: IndexPrivilege) -> Self {
        p.as_str().to_string()
    }
}

/// Parse every entry of a string list into a vocabulary, stopping at the
/// first unknown entry.
pub fn parse_all<P: PrivilegeSet>(values: &[String]) -> Result<Vec<P>, UnknownPrivilege> {
    values.iter().map(|v| v.parse::<P>()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════════
