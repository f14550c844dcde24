//! Option model: the merged global options map and renderable option values.
//!
//! Source declarations such as `dto A, B with mapstruct except C` reduce to a
//! family, an optional value, and included/excluded entity lists. Repeated
//! declarations of the same slot are merged by set union.
//!
//! # Overview
//!
//! - [`OptionFamily`] - The closed set of option names the model has slots for.
//! - [`OptionEntry`] - Included/excluded entity names of one merged slot.
//! - [`Options`] - The fixed-shape map from family to merged slot.
//! - [`JdlOption`] - A standalone option value that renders to source text.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    annotation::{Annotation, MapEntry},
    entity_list,
    error::ModelError,
};

/// Shape of an option or annotation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// A flag without a value.
    Unary,
    /// A flag carrying exactly one value.
    Binary,
    /// A flag carrying an ordered map of entries.
    Map,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Unary => write!(f, "UNARY"),
            OptionKind::Binary => write!(f, "BINARY"),
            OptionKind::Map => write!(f, "MAP"),
        }
    }
}

/// The option families the global options map has slots for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionFamily {
    Dto,
    Pagination,
    Service,
    Microservice,
    Search,
    SkipClient,
    SkipServer,
    Filter,
    AngularSuffix,
    NoFluentMethod,
    ReadOnly,
    Embedded,
    ClientRootFolder,
}

impl OptionFamily {
    /// Every family, in the order the options map lists them.
    pub const ALL: [OptionFamily; 13] = [
        OptionFamily::Dto,
        OptionFamily::Pagination,
        OptionFamily::Service,
        OptionFamily::Microservice,
        OptionFamily::Search,
        OptionFamily::SkipClient,
        OptionFamily::SkipServer,
        OptionFamily::Filter,
        OptionFamily::AngularSuffix,
        OptionFamily::NoFluentMethod,
        OptionFamily::ReadOnly,
        OptionFamily::Embedded,
        OptionFamily::ClientRootFolder,
    ];

    /// The family name as written in source.
    pub fn name(&self) -> &'static str {
        match self {
            OptionFamily::Dto => "dto",
            OptionFamily::Pagination => "pagination",
            OptionFamily::Service => "service",
            OptionFamily::Microservice => "microservice",
            OptionFamily::Search => "search",
            OptionFamily::SkipClient => "skipClient",
            OptionFamily::SkipServer => "skipServer",
            OptionFamily::Filter => "filter",
            OptionFamily::AngularSuffix => "angularSuffix",
            OptionFamily::NoFluentMethod => "noFluentMethod",
            OptionFamily::ReadOnly => "readOnly",
            OptionFamily::Embedded => "embedded",
            OptionFamily::ClientRootFolder => "clientRootFolder",
        }
    }

    /// Whether declarations of this family carry a value.
    pub fn carries_value(&self) -> bool {
        match self {
            OptionFamily::SkipClient
            | OptionFamily::SkipServer
            | OptionFamily::Filter
            | OptionFamily::NoFluentMethod
            | OptionFamily::ReadOnly
            | OptionFamily::Embedded => false,
            OptionFamily::Dto
            | OptionFamily::Pagination
            | OptionFamily::Service
            | OptionFamily::Microservice
            | OptionFamily::Search
            | OptionFamily::AngularSuffix
            | OptionFamily::ClientRootFolder => true,
        }
    }

    /// [`OptionKind::Binary`] for value-bearing families, [`OptionKind::Unary`]
    /// otherwise. No family is [`OptionKind::Map`].
    pub fn kind(&self) -> OptionKind {
        if self.carries_value() {
            OptionKind::Binary
        } else {
            OptionKind::Unary
        }
    }

    /// Resolve the name of a value-bearing declaration, accepting `paginate`
    /// as the source spelling of [`OptionFamily::Pagination`].
    pub fn from_binary_name(name: &str) -> Result<Self, ModelError> {
        match name {
            "paginate" => Ok(OptionFamily::Pagination),
            other => other.parse(),
        }
    }
}

impl FromStr for OptionFamily {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| ModelError::UnknownOptionFamily(s.to_string()))
    }
}

impl fmt::Display for OptionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Included and excluded entity names of one merged option slot.
///
/// Both lists hold each name at most once, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    list: Vec<String>,
    excluded: Vec<String>,
}

impl OptionEntry {
    /// Create an entry, dropping repeated names.
    pub fn new(list: Vec<String>, excluded: Vec<String>) -> Self {
        Self {
            list: entity_list::dedupe(list),
            excluded: entity_list::dedupe(excluded),
        }
    }

    /// Union this entry with another one, returning the merged entry.
    ///
    /// Names already present keep their position; new names are appended.
    pub fn merge(self, other: &OptionEntry) -> Self {
        Self {
            list: entity_list::dedupe(self.list.into_iter().chain(other.list.iter().cloned())),
            excluded: entity_list::dedupe(
                self.excluded
                    .into_iter()
                    .chain(other.excluded.iter().cloned()),
            ),
        }
    }

    /// Entity names (or the wildcard) the option applies to.
    pub fn list(&self) -> &[String] {
        &self.list
    }

    /// Entity names the option explicitly does not apply to.
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Returns `true` if the option was never declared for any entity.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.excluded.is_empty()
    }
}

/// The merged state of one option family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionSlot {
    /// A flag family: one entry for the whole family.
    Unary(OptionEntry),
    /// A value-bearing family: one entry per distinct value, in first-seen order.
    Binary(IndexMap<String, OptionEntry>),
}

impl OptionSlot {
    fn empty(family: OptionFamily) -> Self {
        if family.carries_value() {
            OptionSlot::Binary(IndexMap::new())
        } else {
            OptionSlot::Unary(OptionEntry::default())
        }
    }

    fn kind(&self) -> OptionKind {
        match self {
            OptionSlot::Unary(_) => OptionKind::Unary,
            OptionSlot::Binary(_) => OptionKind::Binary,
        }
    }
}

/// The global options map of a document.
///
/// Every [`OptionFamily`] has a slot from construction on, so the map always
/// has the same shape regardless of which options the source declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Options {
    slots: IndexMap<OptionFamily, OptionSlot>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Create the options map with an empty slot for every family.
    pub fn new() -> Self {
        let slots = OptionFamily::ALL
            .into_iter()
            .map(|family| (family, OptionSlot::empty(family)))
            .collect();
        Self { slots }
    }

    /// Merge a flag declaration into its family slot.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OptionKindMismatch`] if the family carries values.
    pub fn merge_unary(mut self, family: OptionFamily, entry: &OptionEntry) -> Result<Self, ModelError> {
        match self.slots.get_mut(&family) {
            Some(OptionSlot::Unary(current)) => {
                *current = std::mem::take(current).merge(entry);
                Ok(self)
            }
            Some(slot) => Err(ModelError::OptionKindMismatch {
                family,
                expected: slot.kind(),
                found: OptionKind::Unary,
            }),
            None => Err(ModelError::UnknownOptionFamily(family.name().to_string())),
        }
    }

    /// Merge a value-bearing declaration into the entry for `value`, creating
    /// the entry the first time the value is seen for this family.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::OptionKindMismatch`] if the family is a flag family.
    pub fn merge_binary(
        mut self,
        family: OptionFamily,
        value: &str,
        entry: &OptionEntry,
    ) -> Result<Self, ModelError> {
        match self.slots.get_mut(&family) {
            Some(OptionSlot::Binary(values)) => {
                let current = values.entry(value.to_string()).or_default();
                *current = std::mem::take(current).merge(entry);
                Ok(self)
            }
            Some(slot) => Err(ModelError::OptionKindMismatch {
                family,
                expected: slot.kind(),
                found: OptionKind::Binary,
            }),
            None => Err(ModelError::UnknownOptionFamily(family.name().to_string())),
        }
    }

    /// Get the slot of a family.
    pub fn slot(&self, family: OptionFamily) -> Option<&OptionSlot> {
        self.slots.get(&family)
    }

    /// Get the merged entry of a flag family.
    pub fn unary(&self, family: OptionFamily) -> Option<&OptionEntry> {
        match self.slots.get(&family)? {
            OptionSlot::Unary(entry) => Some(entry),
            OptionSlot::Binary(_) => None,
        }
    }

    /// Get the merged entry of a value-bearing family for one value.
    pub fn binary(&self, family: OptionFamily, value: &str) -> Option<&OptionEntry> {
        match self.slots.get(&family)? {
            OptionSlot::Binary(values) => values.get(value),
            OptionSlot::Unary(_) => None,
        }
    }

    /// Iterate over every family and its slot.
    pub fn iter(&self) -> impl Iterator<Item = (OptionFamily, &OptionSlot)> {
        self.slots.iter().map(|(family, slot)| (*family, slot))
    }

    /// Flatten the declared slots into standalone option values.
    ///
    /// Flag families yield one option when declared; value-bearing families
    /// yield one option per value.
    pub fn to_jdl_options(&self) -> Vec<JdlOption> {
        let mut options = Vec::new();
        for (family, slot) in self.iter() {
            match slot {
                OptionSlot::Unary(entry) => {
                    if !entry.is_empty() {
                        options.push(JdlOption::unary(
                            family.name(),
                            entry.list().to_vec(),
                            entry.excluded().to_vec(),
                        ));
                    }
                }
                OptionSlot::Binary(values) => {
                    for (value, entry) in values {
                        options.push(JdlOption::binary(
                            family.name(),
                            value.clone(),
                            entry.list().to_vec(),
                            entry.excluded().to_vec(),
                        ));
                    }
                }
            }
        }
        options
    }
}

/// The value carried by a [`JdlOption`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JdlOptionValue {
    Unary,
    Binary(String),
    Map(Vec<MapEntry>),
}

/// A single option applied to a set of entities, renderable back to source form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdlOption {
    name: String,
    entity_names: Vec<String>,
    excluded_names: Vec<String>,
    value: JdlOptionValue,
}

impl JdlOption {
    fn new(
        name: impl Into<String>,
        entity_names: Vec<String>,
        excluded_names: Vec<String>,
        value: JdlOptionValue,
    ) -> Self {
        Self {
            name: name.into(),
            entity_names: entity_list::dedupe(entity_names),
            excluded_names: entity_list::dedupe(excluded_names),
            value,
        }
    }

    /// Create a flag option.
    pub fn unary(name: impl Into<String>, entity_names: Vec<String>, excluded_names: Vec<String>) -> Self {
        Self::new(name, entity_names, excluded_names, JdlOptionValue::Unary)
    }

    /// Create a single-valued option.
    pub fn binary(
        name: impl Into<String>,
        value: impl Into<String>,
        entity_names: Vec<String>,
        excluded_names: Vec<String>,
    ) -> Self {
        Self::new(
            name,
            entity_names,
            excluded_names,
            JdlOptionValue::Binary(value.into()),
        )
    }

    /// Create a map-valued option.
    pub fn map(
        name: impl Into<String>,
        entries: Vec<MapEntry>,
        entity_names: Vec<String>,
        excluded_names: Vec<String>,
    ) -> Self {
        Self::new(name, entity_names, excluded_names, JdlOptionValue::Map(entries))
    }

    /// Project an annotation declared on an entity onto that entity.
    pub fn from_annotation(annotation: &Annotation, entity_name: impl Into<String>) -> Self {
        let entity_names = vec![entity_name.into()];
        match annotation {
            Annotation::Unary { option_name } => Self::unary(option_name, entity_names, Vec::new()),
            Annotation::Binary {
                option_name,
                option_value,
            } => Self::binary(option_name, option_value, entity_names, Vec::new()),
            Annotation::Map {
                option_name,
                option_value,
            } => Self::map(option_name, option_value.clone(), entity_names, Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entity_names(&self) -> &[String] {
        &self.entity_names
    }

    pub fn excluded_names(&self) -> &[String] {
        &self.excluded_names
    }

    pub fn value(&self) -> &JdlOptionValue {
        &self.value
    }

    /// Get the shape of this option.
    pub fn kind(&self) -> OptionKind {
        match self.value {
            JdlOptionValue::Unary => OptionKind::Unary,
            JdlOptionValue::Binary(_) => OptionKind::Binary,
            JdlOptionValue::Map(_) => OptionKind::Map,
        }
    }
}

impl fmt::Display for JdlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entity_names = self.entity_names.join(", ");
        write!(f, "{} {}", self.name, entity_names)?;
        match &self.value {
            JdlOptionValue::Unary => {}
            JdlOptionValue::Binary(value) => write!(f, " with {value}")?,
            JdlOptionValue::Map(entries) => {
                write!(f, " with {{")?;
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{entry}")?;
                }
                write!(f, "}}")?;
            }
        }
        if !self.excluded_names.is_empty() {
            write!(f, " except {}", self.excluded_names.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_options_have_every_family_slot() {
        let options = Options::new();
        for family in OptionFamily::ALL {
            let slot = options.slot(family).expect("every family has a slot");
            if family.carries_value() {
                assert_eq!(slot, &OptionSlot::Binary(IndexMap::new()));
            } else {
                assert_eq!(slot, &OptionSlot::Unary(OptionEntry::default()));
            }
            assert_eq!(slot.kind(), family.kind());
        }
    }

    #[test]
    fn test_no_family_is_map_kind() {
        for family in OptionFamily::ALL {
            assert_ne!(family.kind(), OptionKind::Map, "{family}");
        }
        assert!(OptionFamily::Dto.carries_value());
        assert!(!OptionFamily::SkipClient.carries_value());
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("skipClient".parse::<OptionFamily>(), Ok(OptionFamily::SkipClient));
        assert_eq!("clientRootFolder".parse::<OptionFamily>(), Ok(OptionFamily::ClientRootFolder));
        assert_eq!(
            "paginate".parse::<OptionFamily>(),
            Err(ModelError::UnknownOptionFamily("paginate".to_string()))
        );
        assert_eq!(OptionFamily::from_binary_name("paginate"), Ok(OptionFamily::Pagination));
        assert_eq!(OptionFamily::from_binary_name("pagination"), Ok(OptionFamily::Pagination));
    }

    #[test]
    fn test_merge_unary_unions_lists() {
        let options = Options::new()
            .merge_unary(OptionFamily::SkipClient, &OptionEntry::new(names(&["A", "B"]), vec![]))
            .unwrap()
            .merge_unary(
                OptionFamily::SkipClient,
                &OptionEntry::new(names(&["B", "C"]), names(&["D"])),
            )
            .unwrap();

        let entry = options.unary(OptionFamily::SkipClient).unwrap();
        assert_eq!(entry.list(), names(&["A", "B", "C"]));
        assert_eq!(entry.excluded(), names(&["D"]));
    }

    #[test]
    fn test_merge_binary_keys_by_value() {
        let options = Options::new()
            .merge_binary(OptionFamily::Dto, "mapstruct", &OptionEntry::new(names(&["A"]), vec![]))
            .unwrap()
            .merge_binary(OptionFamily::Dto, "mapstruct", &OptionEntry::new(names(&["B"]), vec![]))
            .unwrap()
            .merge_binary(OptionFamily::Dto, "other", &OptionEntry::new(names(&["C"]), vec![]))
            .unwrap();

        assert_eq!(
            options.binary(OptionFamily::Dto, "mapstruct").unwrap().list(),
            names(&["A", "B"])
        );
        assert_eq!(options.binary(OptionFamily::Dto, "other").unwrap().list(), names(&["C"]));
        assert!(options.binary(OptionFamily::Dto, "missing").is_none());
    }

    #[test]
    fn test_merge_kind_mismatch() {
        let err = Options::new()
            .merge_unary(OptionFamily::Dto, &OptionEntry::default())
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::OptionKindMismatch {
                family: OptionFamily::Dto,
                expected: OptionKind::Binary,
                found: OptionKind::Unary,
            }
        );

        let err = Options::new()
            .merge_binary(OptionFamily::Filter, "x", &OptionEntry::default())
            .unwrap_err();
        assert!(matches!(err, ModelError::OptionKindMismatch { .. }));
    }

    #[test]
    fn test_options_serialized_shape() {
        let options = Options::new()
            .merge_binary(OptionFamily::Service, "serviceImpl", &OptionEntry::new(names(&["*"]), names(&["A"])))
            .unwrap();
        let json = serde_json::to_value(&options).unwrap();

        assert_eq!(json["skipClient"], serde_json::json!({"list": [], "excluded": []}));
        assert_eq!(json["dto"], serde_json::json!({}));
        assert_eq!(
            json["service"],
            serde_json::json!({"serviceImpl": {"list": ["*"], "excluded": ["A"]}})
        );
    }

    #[test]
    fn test_to_jdl_options_skips_undeclared() {
        let options = Options::new()
            .merge_unary(OptionFamily::Filter, &OptionEntry::new(names(&["A"]), vec![]))
            .unwrap()
            .merge_binary(OptionFamily::Pagination, "pager", &OptionEntry::new(names(&["B"]), vec![]))
            .unwrap();

        let rendered: Vec<String> = options.to_jdl_options().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["pagination B with pager", "filter A"]);
    }

    #[test]
    fn test_jdl_option_display() {
        let option = JdlOption::unary("skipClient", names(&["A", "B"]), vec![]);
        assert_eq!(option.to_string(), "skipClient A, B");

        let option = JdlOption::binary("dto", "mapstruct", names(&["*"]), names(&["C", "D"]));
        assert_eq!(option.to_string(), "dto * with mapstruct except C, D");

        let option = JdlOption::map(
            "cache",
            vec![MapEntry::pair("region", "users"), MapEntry::key("eager")],
            names(&["A", "B"]),
            vec![],
        );
        assert_eq!(option.kind(), OptionKind::Map);
        assert_eq!(option.to_string(), "cache A, B with {region=users, eager}");
    }

    #[test]
    fn test_jdl_option_from_annotation() {
        let annotation = Annotation::map("cache", vec![MapEntry::key("eager")]);
        let option = JdlOption::from_annotation(&annotation, "Foo");
        assert_eq!(option.name(), "cache");
        assert_eq!(option.entity_names(), names(&["Foo"]));
        assert!(option.excluded_names().is_empty());
        assert_eq!(option.value(), &JdlOptionValue::Map(vec![MapEntry::key("eager")]));
    }

    #[test]
    fn test_jdl_option_dedupes_names() {
        let option = JdlOption::unary("filter", names(&["A", "A", "B"]), names(&["C", "C"]));
        assert_eq!(option.entity_names(), names(&["A", "B"]));
        assert_eq!(option.excluded_names(), names(&["C"]));
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn names_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[A-E]", 0..6)
    }

    fn entry_strategy() -> impl Strategy<Value = OptionEntry> {
        (names_strategy(), names_strategy()).prop_map(|(list, excluded)| OptionEntry::new(list, excluded))
    }

    fn as_sets(entry: &OptionEntry) -> (BTreeSet<String>, BTreeSet<String>) {
        (
            entry.list().iter().cloned().collect(),
            entry.excluded().iter().cloned().collect(),
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Merging the same payload twice is the same as merging it once.
    fn check_merge_is_idempotent(base: OptionEntry, other: OptionEntry) -> Result<(), TestCaseError> {
        let once = base.merge(&other);
        let twice = once.clone().merge(&other);
        prop_assert_eq!(once, twice);
        Ok(())
    }

    /// Merge order does not change which names end up in the entry.
    fn check_merge_is_commutative(a: OptionEntry, b: OptionEntry) -> Result<(), TestCaseError> {
        let ab = OptionEntry::default().merge(&a).merge(&b);
        let ba = OptionEntry::default().merge(&b).merge(&a);
        prop_assert_eq!(as_sets(&ab), as_sets(&ba));
        Ok(())
    }

    /// Merged lists never hold a name twice.
    fn check_merge_has_no_duplicates(a: OptionEntry, b: OptionEntry) -> Result<(), TestCaseError> {
        let merged = a.merge(&b);
        let (list, excluded) = as_sets(&merged);
        prop_assert_eq!(list.len(), merged.list().len());
        prop_assert_eq!(excluded.len(), merged.excluded().len());
        Ok(())
    }

    /// Merging through the options map agrees with merging entries directly.
    fn check_binary_merge_matches_entry_merge(a: OptionEntry, b: OptionEntry) -> Result<(), TestCaseError> {
        let options = Options::new()
            .merge_binary(OptionFamily::Search, "elasticsearch", &a)
            .and_then(|options| options.merge_binary(OptionFamily::Search, "elasticsearch", &b));
        prop_assert!(options.is_ok());
        let options = options.unwrap();
        let expected = OptionEntry::default().merge(&a).merge(&b);
        prop_assert_eq!(options.binary(OptionFamily::Search, "elasticsearch"), Some(&expected));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn merge_is_idempotent(base in entry_strategy(), other in entry_strategy()) {
            check_merge_is_idempotent(base, other)?;
        }

        #[test]
        fn merge_is_commutative(a in entry_strategy(), b in entry_strategy()) {
            check_merge_is_commutative(a, b)?;
        }

        #[test]
        fn merge_has_no_duplicates(a in entry_strategy(), b in entry_strategy()) {
            check_merge_has_no_duplicates(a, b)?;
        }

        #[test]
        fn binary_merge_matches_entry_merge(a in entry_strategy(), b in entry_strategy()) {
            check_binary_merge_matches_entry_merge(a, b)?;
        }
    }
}
