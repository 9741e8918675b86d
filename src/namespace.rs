//! Prefix-grouped definition namespaces
//!
//! `build` scans a constant table once, keeps the names matching a
//! grouping prefix (and optionally a type tag), strips the prefix, and
//! freezes the result. A published namespace answers lookups for the
//! process lifetime and rejects every write.

use fnv::FnvHashMap;

use crate::error::{DefsError, Result};
use crate::native::{Constant, TypeTag};

/// Immutable mapping of short names to constant values
///
/// Instances come only from [`build`]; there is no mutable surface.
/// [`Namespace::set`] always fails, for present and absent names alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    filter: Option<TypeTag>,
    members: FnvHashMap<&'static str, u64>,
}

/// Build a namespace from every constant matching `prefix` and `filter`
///
/// Short names are the original names with exactly `prefix` removed.
/// A constant passes an absent filter unconditionally; a present filter
/// uses [`TypeTag::conforms_to`], not exact tag equality. Zero matches
/// produce an empty namespace, not an error.
///
/// # Errors
///
/// `InvalidArgument` if `prefix` is empty.
pub fn build(source: &[Constant], prefix: &str, filter: Option<TypeTag>) -> Result<Namespace> {
    if prefix.is_empty() {
        return Err(DefsError::InvalidArgument {
            reason: "grouping prefix must be non-empty".to_string(),
        });
    }

    let mut members = FnvHashMap::default();
    for constant in source {
        let Some(short) = constant.name.strip_prefix(prefix) else {
            continue;
        };
        if let Some(wanted) = filter {
            if !constant.tag.conforms_to(wanted) {
                continue;
            }
        }
        // Last write wins; only a duplicate source name can get here.
        if let Some(previous) = members.insert(short, constant.value) {
            tracing::warn!(
                short,
                previous,
                value = constant.value,
                "short name collision, keeping the later constant"
            );
        }
    }

    tracing::debug!(prefix, members = members.len(), "built definition namespace");
    Ok(Namespace { filter, members })
}

impl Namespace {
    /// Look up the value bound to a short name
    ///
    /// # Errors
    ///
    /// `UndefinedMember` if the name has no binding.
    pub fn get(&self, short_name: &str) -> Result<u64> {
        self.members
            .get(short_name)
            .copied()
            .ok_or_else(|| DefsError::UndefinedMember {
                name: short_name.to_string(),
            })
    }

    /// Permanent write-guard: every call fails
    ///
    /// Fails whether or not `short_name` is already bound.
    pub fn set(&self, short_name: &str, _value: u64) -> Result<()> {
        Err(DefsError::ImmutableNamespace {
            name: short_name.to_string(),
        })
    }

    /// Type filter recorded at construction, if any
    pub fn type_filter(&self) -> Option<TypeTag> {
        self.filter
    }

    /// True if a short name has a binding
    pub fn contains(&self, short_name: &str) -> bool {
        self.members.contains_key(short_name)
    }

    /// Number of bound members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no constant matched at construction
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.members.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Iterate over `(short_name, value)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.members.iter().map(|(name, value)| (*name, *value))
    }

    /// First short name bound to `value`, in sorted-name order
    pub fn name_of(&self, value: u64) -> Option<&'static str> {
        self.names()
            .into_iter()
            .find(|name| self.members[name] == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::CONSTANTS;

    const SOURCE: &[Constant] = &[
        Constant {
            name: "UNDEFINED_FOO",
            value: 1,
            tag: TypeTag::Uint32,
        },
        Constant {
            name: "UNDEFINED_BAR",
            value: 2,
            tag: TypeTag::Uint64,
        },
        Constant {
            name: "OTHER_BAZ",
            value: 3,
            tag: TypeTag::Uint32,
        },
    ];

    #[test]
    fn test_prefix_filter_and_strip() {
        let ns = build(SOURCE, "UNDEFINED_", None).unwrap();
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.get("FOO").unwrap(), 1);
        assert_eq!(ns.get("BAR").unwrap(), 2);
        assert!(!ns.contains("BAZ"));
        assert!(!ns.contains("OTHER_BAZ"));
    }

    #[test]
    fn test_type_filter_uses_conformance() {
        // Uint32 members conform to a Uint64 filter, Uint64 members do
        // not conform to a Uint32 one.
        let ns = build(SOURCE, "UNDEFINED_", Some(TypeTag::Uint32)).unwrap();
        assert_eq!(ns.names(), vec!["FOO"]);
        let ns = build(SOURCE, "UNDEFINED_", Some(TypeTag::Uint64)).unwrap();
        assert_eq!(ns.names(), vec!["BAR", "FOO"]);
        assert_eq!(ns.type_filter(), Some(TypeTag::Uint64));
    }

    #[test]
    fn test_empty_source_is_legal() {
        let ns = build(&[], "X_", None).unwrap();
        assert!(ns.is_empty());
        assert!(matches!(
            ns.get("ANYTHING"),
            Err(DefsError::UndefinedMember { .. })
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(matches!(
            build(SOURCE, "", None),
            Err(DefsError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_write_guard_is_unconditional() {
        let ns = build(SOURCE, "UNDEFINED_", None).unwrap();
        let before = ns.clone();
        assert!(matches!(
            ns.set("FOO", 9),
            Err(DefsError::ImmutableNamespace { .. })
        ));
        assert!(matches!(
            ns.set("NOT_PRESENT", 9),
            Err(DefsError::ImmutableNamespace { .. })
        ));
        assert_eq!(ns, before);
        assert_eq!(ns.get("FOO").unwrap(), 1);
    }

    #[test]
    fn test_duplicate_source_name_last_wins() {
        let dup: &[Constant] = &[
            Constant {
                name: "UNDEFINED_FOO",
                value: 1,
                tag: TypeTag::Uint32,
            },
            Constant {
                name: "UNDEFINED_FOO",
                value: 7,
                tag: TypeTag::Uint32,
            },
        ];
        let ns = build(dup, "UNDEFINED_", None).unwrap();
        assert_eq!(ns.len(), 1);
        assert_eq!(ns.get("FOO").unwrap(), 7);
    }

    #[test]
    fn test_rebuild_is_value_equal() {
        let a = build(SOURCE, "UNDEFINED_", Some(TypeTag::Uint64)).unwrap();
        let b = build(SOURCE, "UNDEFINED_", Some(TypeTag::Uint64)).unwrap();
        assert_eq!(a, b);
        let c = build(SOURCE, "UNDEFINED_", None).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_name_of_reverse_lookup() {
        let ns = build(CONSTANTS, "UNDEFINED_", None).unwrap();
        // Many sentinels share u32::MAX; sorted-name order makes the
        // answer deterministic.
        assert_eq!(ns.name_of(u32::MAX as u64), Some("ATTRIBUTE"));
        assert_eq!(ns.name_of(42), None);
    }

    #[test]
    fn test_native_table_round_trip() {
        let ns = build(CONSTANTS, "UNDEFINED_", None).unwrap();
        for name in ns.names() {
            let full = format!("UNDEFINED_{name}");
            assert!(CONSTANTS.iter().any(|c| c.name == full));
        }
        assert_eq!(ns.get("STRING").unwrap(), u32::MAX as u64);
        assert_eq!(ns.get("TIMESTAMP").unwrap(), u64::MAX);
        assert!(!ns.contains("VERSION_MAJOR"));
    }
}
