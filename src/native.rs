//! Exported constant surface of the native trace-format library
//!
//! Everything the definitions layer consumes lives here as explicit data:
//! a flat table of `(name, value, type tag)` triples and one handle per
//! enumeration category the library already keeps distinct. No runtime
//! discovery is involved; the table is the library's published snapshot.

/// Runtime type tag attached to every exported constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
}

impl TypeTag {
    /// Width of the tagged representation in bits
    pub fn bits(self) -> u32 {
        match self {
            TypeTag::Uint8 | TypeTag::Int8 => 8,
            TypeTag::Uint16 | TypeTag::Int16 => 16,
            TypeTag::Uint32 | TypeTag::Int32 => 32,
            TypeTag::Uint64 | TypeTag::Int64 => 64,
        }
    }

    /// True for the unsigned tags
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeTag::Uint8 | TypeTag::Uint16 | TypeTag::Uint32 | TypeTag::Uint64
        )
    }

    /// Is-instance check against a filter tag
    ///
    /// A tag conforms to itself and to every wider tag of the same
    /// signedness, so a `Uint8` constant passes a `Uint32` filter but a
    /// `Uint64` constant does not pass a `Uint32` one.
    pub fn conforms_to(self, filter: TypeTag) -> bool {
        self.is_unsigned() == filter.is_unsigned() && self.bits() <= filter.bits()
    }

    /// Tag name as it appears in tooling output
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Uint8 => "uint8",
            TypeTag::Uint16 => "uint16",
            TypeTag::Uint32 => "uint32",
            TypeTag::Uint64 => "uint64",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
        }
    }
}

/// A single named constant exported by the native library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    /// Exported name, unique within the library surface
    pub name: &'static str,
    /// Raw value; signed constants are stored in their u64 representation
    pub value: u64,
    /// Runtime type tag of the value
    pub tag: TypeTag,
}

const fn def(name: &'static str, value: u64, tag: TypeTag) -> Constant {
    Constant { name, value, tag }
}

/// Full constant table exported by the native library
///
/// Undefined-value sentinels come first: one per integer width, then one
/// per definition-reference type. Reference widths follow the format:
/// locations and timestamps are 64-bit, the type and I/O-paradigm
/// references are 8-bit, everything else is 32-bit. Signed sentinels sit
/// at the positive maximum of their width. The tail holds the format
/// version triple and the chunking defaults.
pub const CONSTANTS: &[Constant] = &[
    def("UNDEFINED_UINT8", u8::MAX as u64, TypeTag::Uint8),
    def("UNDEFINED_UINT16", u16::MAX as u64, TypeTag::Uint16),
    def("UNDEFINED_UINT32", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_UINT64", u64::MAX, TypeTag::Uint64),
    def("UNDEFINED_INT8", i8::MAX as u64, TypeTag::Int8),
    def("UNDEFINED_INT16", i16::MAX as u64, TypeTag::Int16),
    def("UNDEFINED_INT32", i32::MAX as u64, TypeTag::Int32),
    def("UNDEFINED_INT64", i64::MAX as u64, TypeTag::Int64),
    def("UNDEFINED_TYPE", u8::MAX as u64, TypeTag::Uint8),
    def("UNDEFINED_TIMESTAMP", u64::MAX, TypeTag::Uint64),
    def("UNDEFINED_ATTRIBUTE", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_CALLING_CONTEXT", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_CALLPATH", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_CART_DIMENSION", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_CART_TOPOLOGY", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_COMM", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_GROUP", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_INTERRUPT_GENERATOR", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_IO_FILE", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_IO_HANDLE", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_IO_PARADIGM", u8::MAX as u64, TypeTag::Uint8),
    def("UNDEFINED_LOCATION", u64::MAX, TypeTag::Uint64),
    def("UNDEFINED_LOCATION_GROUP", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_METRIC", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_METRIC_MEMBER", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_PARAMETER", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_REGION", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_RMA_WIN", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_SOURCE_CODE_LOCATION", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_STRING", u32::MAX as u64, TypeTag::Uint32),
    def("UNDEFINED_SYSTEM_TREE_NODE", u32::MAX as u64, TypeTag::Uint32),
    def("VERSION_MAJOR", 3, TypeTag::Uint8),
    def("VERSION_MINOR", 0, TypeTag::Uint8),
    def("VERSION_BUGFIX", 3, TypeTag::Uint8),
    def("CHUNK_SIZE_EVENTS_DEFAULT", 1024 * 1024, TypeTag::Uint64),
    def("CHUNK_SIZE_DEFINITIONS_DEFAULT", 4 * 1024 * 1024, TypeTag::Uint64),
];

/// Handle for an enumeration category the native library keeps distinct
///
/// These categories need no prefix grouping; the library exports each as
/// its own type. Declared in the order the format documentation lists
/// them: general definitions first, then definition records, then the
/// event-record enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumKind {
    Boolean,
    FileType,
    FileSubstrate,
    MappingType,
    FileMode,
    Compression,
    FlushType,
    Hint,
    ThumbnailType,
    Paradigm,
    ParadigmClass,
    ParadigmProperty,
    SystemTreeDomain,
    LocationGroupType,
    LocationType,
    RegionRole,
    RegionFlag,
    GroupType,
    GroupFlag,
    Base,
    MetricOccurrence,
    MetricType,
    MetricValueProperty,
    MetricTiming,
    MetricMode,
    MetricScope,
    RecorderKind,
    ParameterType,
    CartPeriodicity,
    InterruptGeneratorMode,
    MeasurementMode,
    CollectiveOp,
    RmaSyncType,
    RmaSyncLevel,
    RmaAtomicType,
    LockType,
    CommFlag,
    RmaWinFlag,
    IoParadigmClass,
    IoParadigmFlag,
    IoParadigmProperty,
    IoHandleFlag,
    IoAccessMode,
    IoStatusFlag,
    IoCreationFlag,
    IoSeekOption,
    IoOperationMode,
    IoOperationFlag,
    Type,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_names_unique() {
        for (i, a) in CONSTANTS.iter().enumerate() {
            for b in &CONSTANTS[i + 1..] {
                assert_ne!(a.name, b.name, "duplicate constant name");
            }
        }
    }

    #[test]
    fn test_sentinel_widths() {
        let by_name = |n: &str| CONSTANTS.iter().find(|c| c.name == n).unwrap();
        assert_eq!(by_name("UNDEFINED_STRING").value, u32::MAX as u64);
        assert_eq!(by_name("UNDEFINED_LOCATION").tag, TypeTag::Uint64);
        assert_eq!(by_name("UNDEFINED_TYPE").tag, TypeTag::Uint8);
        assert_eq!(by_name("UNDEFINED_IO_PARADIGM").value, u8::MAX as u64);
        assert_eq!(by_name("UNDEFINED_INT64").value, i64::MAX as u64);
    }

    #[test]
    fn test_conformance_widens_within_signedness() {
        assert!(TypeTag::Uint8.conforms_to(TypeTag::Uint8));
        assert!(TypeTag::Uint8.conforms_to(TypeTag::Uint32));
        assert!(TypeTag::Uint32.conforms_to(TypeTag::Uint64));
        assert!(!TypeTag::Uint64.conforms_to(TypeTag::Uint32));
        assert!(!TypeTag::Uint8.conforms_to(TypeTag::Int32));
        assert!(TypeTag::Int16.conforms_to(TypeTag::Int64));
        assert!(!TypeTag::Int64.conforms_to(TypeTag::Uint64));
    }

    #[test]
    fn test_tag_strings() {
        assert_eq!(TypeTag::Uint64.as_str(), "uint64");
        assert_eq!(TypeTag::Int8.as_str(), "int8");
    }
}
