use crate::field::FieldDescriptor;

/// One filterable parameter and the field it constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub parameter: &'static str,
    pub field: FieldDescriptor,
}

const fn node(parameter: &'static str) -> RegistryEntry {
    RegistryEntry {
        parameter,
        field: FieldDescriptor::primary(parameter),
    }
}

const fn entity(parameter: &'static str, name: &'static str) -> RegistryEntry {
    RegistryEntry {
        parameter,
        field: FieldDescriptor::entity(name),
    }
}

/// Filterable parameters, in the order their clauses appear in WHERE.
const ORION_FILTERS: &[RegistryEntry] = &[
    node("Caption"),
    node("IPAddress"),
    node("DNS"),
    node("SysName"),
    node("Vendor"),
    node("MachineType"),
    node("Status"),
    node("IOSVersion"),
    node("IOSImage"),
    node("Location"),
    node("Contact"),
    node("ObjectSubType"),
    node("NodeDescription"),
    entity("EntityName", "EntityName"),
    entity("Serial", "Serial"),
    entity("Model", "Model"),
];

/// Projected on every query regardless of filters.
const ORION_DEFAULT_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::primary("NodeID"),
    FieldDescriptor::primary("Caption"),
    FieldDescriptor::primary("IPAddress"),
    FieldDescriptor::primary("DNS"),
    FieldDescriptor::primary("SysName"),
    FieldDescriptor::primary("Vendor"),
    FieldDescriptor::primary("MachineType"),
    FieldDescriptor::primary("Status"),
    FieldDescriptor::primary("StatusDescription"),
    FieldDescriptor::primary("IOSVersion"),
    FieldDescriptor::primary("IOSImage"),
    FieldDescriptor::primary("Location"),
    FieldDescriptor::primary("Contact"),
    FieldDescriptor::primary("SysObjectID"),
    FieldDescriptor::primary("ObjectSubType"),
    FieldDescriptor::primary("NodeDescription"),
    FieldDescriptor::primary("LastBoot"),
    FieldDescriptor::entity("EntityName"),
    FieldDescriptor::entity("Serial"),
    FieldDescriptor::entity("Model"),
    FieldDescriptor::entity("HardwareRevision"),
    FieldDescriptor::entity("FirmwareRevision"),
];

static ORION: FieldRegistry = FieldRegistry {
    filters: ORION_FILTERS,
    default_fields: ORION_DEFAULT_FIELDS,
};

/// Maps logical filter parameter names to qualified fields.
///
/// Read-only and `Sync`; a single instance can serve any number of
/// concurrent query builds.
#[derive(Debug, Clone, Copy)]
pub struct FieldRegistry {
    filters: &'static [RegistryEntry],
    default_fields: &'static [FieldDescriptor],
}

impl FieldRegistry {
    /// The registry for the Orion node / NCM physical-entity join.
    #[must_use]
    pub fn orion() -> &'static Self {
        &ORION
    }

    /// Creates a registry over custom tables (used by tests and alternate schemas).
    #[must_use]
    pub const fn new(
        filters: &'static [RegistryEntry],
        default_fields: &'static [FieldDescriptor],
    ) -> Self {
        Self {
            filters,
            default_fields,
        }
    }

    /// Resolves a filter parameter, ignoring ASCII case.
    ///
    /// Returns `None` for parameters that are not filterable.
    #[must_use]
    pub fn lookup(&self, parameter: &str) -> Option<&FieldDescriptor> {
        self.filters
            .iter()
            .find(|e| e.parameter.eq_ignore_ascii_case(parameter))
            .map(|e| &e.field)
    }

    /// Returns true if the parameter maps to a field.
    #[must_use]
    pub fn is_filterable(&self, parameter: &str) -> bool {
        self.lookup(parameter).is_some()
    }

    /// Entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.filters.iter()
    }

    /// The fixed default projection.
    #[must_use]
    pub fn default_fields(&self) -> &[FieldDescriptor] {
        self.default_fields
    }

    /// Number of filterable parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
