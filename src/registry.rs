//! Registration table for the pre-separated enumeration categories
//!
//! The native library already keeps these categories apart, so each one
//! binds straight through: public name to category handle, no prefix
//! grouping. The table below is the single source of the binding set and
//! of the export-manifest order; one loop processes it.

use std::sync::OnceLock;

use crate::error::{DefsError, Result};
use crate::namespace::{self, Namespace};
use crate::native::{self, EnumKind};

/// Name under which the sentinel namespace is published
pub const UNDEFINED_NAMESPACE: &str = "Undefined";

const UNDEFINED_PREFIX: &str = "UNDEFINED_";

/// Declaration-ordered bindings of public names to native categories
const ENUM_BINDINGS: &[(&str, EnumKind)] = &[
    ("Boolean", EnumKind::Boolean),
    ("FileType", EnumKind::FileType),
    ("FileSubstrate", EnumKind::FileSubstrate),
    ("MappingType", EnumKind::MappingType),
    ("FileMode", EnumKind::FileMode),
    ("Compression", EnumKind::Compression),
    ("FlushType", EnumKind::FlushType),
    ("Hint", EnumKind::Hint),
    ("ThumbnailType", EnumKind::ThumbnailType),
    ("Paradigm", EnumKind::Paradigm),
    ("ParadigmClass", EnumKind::ParadigmClass),
    ("ParadigmProperty", EnumKind::ParadigmProperty),
    ("SystemTreeDomain", EnumKind::SystemTreeDomain),
    ("LocationGroupType", EnumKind::LocationGroupType),
    ("LocationType", EnumKind::LocationType),
    ("RegionRole", EnumKind::RegionRole),
    ("RegionFlag", EnumKind::RegionFlag),
    ("GroupType", EnumKind::GroupType),
    ("GroupFlag", EnumKind::GroupFlag),
    ("Base", EnumKind::Base),
    ("MetricOccurrence", EnumKind::MetricOccurrence),
    ("MetricType", EnumKind::MetricType),
    ("MetricValueProperty", EnumKind::MetricValueProperty),
    ("MetricTiming", EnumKind::MetricTiming),
    ("MetricMode", EnumKind::MetricMode),
    ("MetricScope", EnumKind::MetricScope),
    ("RecorderKind", EnumKind::RecorderKind),
    ("ParameterType", EnumKind::ParameterType),
    ("CartPeriodicity", EnumKind::CartPeriodicity),
    ("InterruptGeneratorMode", EnumKind::InterruptGeneratorMode),
    ("MeasurementMode", EnumKind::MeasurementMode),
    ("CollectiveOp", EnumKind::CollectiveOp),
    ("RmaSyncType", EnumKind::RmaSyncType),
    ("RmaSyncLevel", EnumKind::RmaSyncLevel),
    ("RmaAtomicType", EnumKind::RmaAtomicType),
    ("LockType", EnumKind::LockType),
    ("CommFlag", EnumKind::CommFlag),
    ("RmaWinFlag", EnumKind::RmaWinFlag),
    ("IoParadigmClass", EnumKind::IoParadigmClass),
    ("IoParadigmFlag", EnumKind::IoParadigmFlag),
    ("IoParadigmProperty", EnumKind::IoParadigmProperty),
    ("IoHandleFlag", EnumKind::IoHandleFlag),
    ("IoAccessMode", EnumKind::IoAccessMode),
    ("IoStatusFlag", EnumKind::IoStatusFlag),
    ("IoCreationFlag", EnumKind::IoCreationFlag),
    ("IoSeekOption", EnumKind::IoSeekOption),
    ("IoOperationMode", EnumKind::IoOperationMode),
    ("IoOperationFlag", EnumKind::IoOperationFlag),
    ("Type", EnumKind::Type),
];

/// Ordered registry of enumeration category bindings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumRegistry {
    entries: Vec<(&'static str, EnumKind)>,
}

impl EnumRegistry {
    /// Validate and take over a binding table
    ///
    /// # Errors
    ///
    /// `InvalidArgument` on a duplicate public name.
    fn from_bindings(bindings: &[(&'static str, EnumKind)]) -> Result<Self> {
        let mut entries: Vec<(&'static str, EnumKind)> = Vec::with_capacity(bindings.len());
        for &(name, kind) in bindings {
            if entries.iter().any(|&(existing, _)| existing == name) {
                return Err(DefsError::InvalidArgument {
                    reason: format!("duplicate public name in registry: {name}"),
                });
            }
            entries.push((name, kind));
        }
        Ok(Self { entries })
    }

    /// Category handle bound to a public name
    pub fn lookup(&self, public_name: &str) -> Option<EnumKind> {
        self.entries
            .iter()
            .find(|&&(name, _)| name == public_name)
            .map(|&(_, kind)| kind)
    }

    /// Public name a category handle was registered under
    pub fn name_of(&self, kind: EnumKind) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(_, registered)| registered == kind)
            .map(|&(name, _)| name)
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for an empty registry; never the case for the built-in table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate bindings in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, EnumKind)> + '_ {
        self.entries.iter().copied()
    }
}

/// Process-wide frozen definition state
///
/// Holds the sentinel namespace, the category registry, and the export
/// manifest. Built exactly once; read-only ever after, so shared access
/// needs no locking.
#[derive(Debug)]
pub struct Definitions {
    undefined: Namespace,
    registry: EnumRegistry,
    manifest: Vec<&'static str>,
}

impl Definitions {
    fn init() -> Result<Self> {
        let undefined = namespace::build(native::CONSTANTS, UNDEFINED_PREFIX, None)?;
        let registry = EnumRegistry::from_bindings(ENUM_BINDINGS)?;

        // Manifest order: registry entries as declared, then the ad-hoc
        // namespaces. Driven by the literal table alone, never by map
        // iteration order.
        let mut manifest: Vec<&'static str> = registry.iter().map(|(name, _)| name).collect();
        manifest.push(UNDEFINED_NAMESPACE);

        Ok(Self {
            undefined,
            registry,
            manifest,
        })
    }

    /// The sentinel namespace built from the `UNDEFINED_` prefix group
    pub fn undefined(&self) -> &Namespace {
        &self.undefined
    }

    /// The enumeration category registry
    pub fn registry(&self) -> &EnumRegistry {
        &self.registry
    }

    /// Every publicly exposed name, in registration order
    pub fn export_manifest(&self) -> &[&'static str] {
        &self.manifest
    }

    /// A published namespace by its public name
    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        (name == UNDEFINED_NAMESPACE).then_some(&self.undefined)
    }
}

static DEFINITIONS: OnceLock<Definitions> = OnceLock::new();

/// Shared frozen definitions, built on first access
///
/// Construction runs once behind an init guard. A malformed static table
/// is a startup defect: this aborts instead of publishing partial state.
pub fn definitions() -> &'static Definitions {
    DEFINITIONS.get_or_init(|| match Definitions::init() {
        Ok(definitions) => definitions,
        Err(e) => panic!("definition tables failed to initialize: {e}"),
    })
}
