//! Property discovery
//!
//! Pairs each readable accessor of a type with its backing field and
//! produces the ordered list of properties the assembler renders.
//!
//! # Rules
//!
//! 1. All public methods of the type (inherited ones included) are sorted
//!    by name, case-sensitive ascending. This is the property order of the
//!    emitted schema.
//! 2. Methods declared by the root type or by a collection-like type are
//!    skipped.
//! 3. Only getters are kept: names starting with `get` or `is`.
//! 4. The property name is the getter name without its prefix, first
//!    character lower-cased (`getUserName` -> `userName`). A getter that is
//!    all prefix yields no name and is skipped.
//! 5. The getter is paired with the first field whose name matches the
//!    property name case-insensitively. Getters without a field are dropped
//!    unless [`DiscoveryOptions::include_fieldless_accessors`] is set.
//! 6. The property is writable iff another public method is named like the
//!    getter with its first `get` replaced by `set` (case-insensitive).
//!    `is` getters therefore stay read-only unless
//!    [`DiscoveryOptions::is_accessor_mutators`] is set.

use bitflags::bitflags;
use tracing::{debug, trace};
use typeschema_model::{
    DeclaredMethod, FieldInfo, MethodInfo, TypeInfo, TypeRegistry, ROOT_TYPE_NAME,
};

use crate::config::GeneratorConfig;
use crate::error::SchemaResult;

/// Recognised getter prefixes, tried in order; the last match wins
pub const GETTER_PREFIXES: &[&str] = &["get", "is", "get_"];

bitflags! {
    /// What backs a discovered property
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// A public getter exists
        const ACCESSOR = 1 << 0;
        /// A matching public mutator exists
        const MUTATOR = 1 << 1;
        /// A backing field exists
        const FIELD = 1 << 2;
    }
}

/// Knobs for the undecided parts of the pairing rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Keep getters that have no backing field
    pub include_fieldless_accessors: bool,
    /// Also accept `setX` as the mutator of `isX`
    pub is_accessor_mutators: bool,
}

impl From<&GeneratorConfig> for DiscoveryOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            include_fieldless_accessors: config.include_fieldless_accessors,
            is_accessor_mutators: config.is_accessor_mutators,
        }
    }
}

/// A getter paired with its backing field
#[derive(Debug, Clone)]
pub struct DiscoveredProperty<'a> {
    /// Property name derived from the getter
    pub name: String,
    pub accessor: &'a MethodInfo,
    pub field: Option<&'a FieldInfo>,
    pub capabilities: Capabilities,
}

impl DiscoveredProperty<'_> {
    /// Read-only iff no mutator was found
    pub fn is_readonly(&self) -> bool {
        !self.capabilities.contains(Capabilities::MUTATOR)
    }
}

/// Check if a method name follows the getter convention
pub fn is_getter(name: &str) -> bool {
    name.starts_with("get") || name.starts_with("is")
}

/// Property name for a getter, `None` if nothing follows the prefix
pub fn name_from_getter(getter: &str) -> Option<String> {
    let mut stripped = None;
    for prefix in GETTER_PREFIXES {
        if let Some(rest) = getter.strip_prefix(prefix) {
            if rest.is_empty() {
                return None;
            }
            stripped = Some(rest);
        }
    }

    let rest = stripped?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

/// Mutator name for a getter: the first `get` replaced by `set`
pub fn mutator_name(getter: &str) -> String {
    getter.replacen("get", "set", 1)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Check if a getter has a matching public mutator
pub fn has_mutator(methods: &[DeclaredMethod<'_>], getter: &str, options: &DiscoveryOptions) -> bool {
    let mut candidates = vec![mutator_name(getter)];
    if options.is_accessor_mutators {
        if let Some(rest) = getter.strip_prefix("is") {
            candidates.push(format!("set{}", rest));
        }
    }

    methods
        .iter()
        .filter(|m| m.name() != getter)
        .any(|m| candidates.iter().any(|c| eq_ignore_case(m.name(), c)))
}

/// Discover the properties of a type, in accessor-name order
pub fn discover_properties<'a>(
    registry: &'a TypeRegistry,
    ty: &'a TypeInfo,
    options: &DiscoveryOptions,
) -> SchemaResult<Vec<DiscoveredProperty<'a>>> {
    let mut methods = registry.public_methods(ty)?;
    methods.sort_by(|a, b| a.name().cmp(b.name()));

    let mut properties = Vec::with_capacity(ty.fields.len());

    for method in &methods {
        let declared_by = method.declared_by;
        if declared_by.name == ROOT_TYPE_NAME || registry.is_collection_like(declared_by)? {
            trace!("Skipping {} declared by {}", method.name(), declared_by.name);
            continue;
        }

        if !is_getter(method.name()) {
            continue;
        }

        let Some(name) = name_from_getter(method.name()) else {
            trace!("Skipping {}: no property name", method.name());
            continue;
        };

        let field = ty.fields.iter().find(|f| eq_ignore_case(&f.name, &name));
        if field.is_none() && !options.include_fieldless_accessors {
            trace!("Skipping {}.{}: no backing field", ty.name, method.name());
            continue;
        }

        let mut capabilities = Capabilities::ACCESSOR;
        if field.is_some() {
            capabilities |= Capabilities::FIELD;
        }
        if has_mutator(&methods, method.name(), options) {
            capabilities |= Capabilities::MUTATOR;
        }

        properties.push(DiscoveredProperty {
            name,
            accessor: method.method,
            field,
            capabilities,
        });
    }

    debug!(
        "Discovered {} properties on {} ({} public methods)",
        properties.len(),
        ty.name,
        methods.len()
    );
    Ok(properties)
}
