use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation path under which node custom properties live.
pub const CUSTOM_PROPERTIES_BASE: &str = "N.CustomProperties";

/// Which joined record set a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableAlias {
    /// `Orion.Nodes`, aliased `N`.
    Primary,
    /// `NCM.EntityPhysical`, aliased `E`.
    Entity,
}

impl TableAlias {
    /// The alias used for this set in the FROM/JOIN clauses.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::Primary => "N",
            Self::Entity => "E",
        }
    }
}

/// A qualified field name, e.g. `N.Vendor` or `E.Serial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDescriptor {
    pub table: TableAlias,
    pub name: &'static str,
}

impl FieldDescriptor {
    /// A field on the node set.
    #[must_use]
    pub const fn primary(name: &'static str) -> Self {
        Self {
            table: TableAlias::Primary,
            name,
        }
    }

    /// A field on the physical-entity set.
    #[must_use]
    pub const fn entity(name: &'static str) -> Self {
        Self {
            table: TableAlias::Entity,
            name,
        }
    }

    /// The qualified path as it appears in query text.
    #[must_use]
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table.alias(), self.name)
    }
}

/// Builds the field path for an administrator-defined custom property.
///
/// Property names are open-ended, so they are addressed by path rather than
/// through a registry entry.
#[must_use]
pub fn custom_property_path(property: &str) -> String {
    format!("{CUSTOM_PROPERTIES_BASE}.{}", property.trim())
}
