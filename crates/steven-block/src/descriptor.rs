//! Block descriptors: one concrete block state.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::combined::{DataOffset, FamilyId};
use crate::error::BlockError;
use crate::kind::BlockKind;
use crate::state::{StateMap, StateValue};

/// Namespace used when an identifier carries no `plugin:` prefix.
pub const DEFAULT_PLUGIN: &str = "minecraft";

/// A block variant: identity, kind and the state values expansion gave it.
///
/// All blocks except the [missing block](crate::missing_block) belong to a
/// [`BlockFamily`](crate::BlockFamily).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    plugin: Cow<'static, str>,
    name: Cow<'static, str>,
    family: Option<FamilyId>,
    cull_against: bool,
    kind: BlockKind,
    states: StateMap,
}

impl BlockDescriptor {
    pub fn new(
        plugin: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        kind: BlockKind,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            name: name.into(),
            family: None,
            cull_against: true,
            kind,
            states: StateMap::new(),
        }
    }

    /// Parse a `plugin:name` identifier. A bare name gets the
    /// [`DEFAULT_PLUGIN`] namespace.
    pub fn parse(identifier: &str, kind: BlockKind) -> Result<Self, BlockError> {
        let (plugin, name) = split_identifier(identifier)?;
        Ok(Self::new(plugin.to_owned(), name.to_owned(), kind))
    }

    pub(crate) const fn sentinel(plugin: &'static str, name: &'static str) -> Self {
        Self {
            plugin: Cow::Borrowed(plugin),
            name: Cow::Borrowed(name),
            family: None,
            cull_against: true,
            kind: BlockKind::Plain,
            states: BTreeMap::new(),
        }
    }

    pub fn with_cull_against(mut self, cull_against: bool) -> Self {
        self.cull_against = cull_against;
        self
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> (&str, &str) {
        (&self.plugin, &self.name)
    }

    pub fn family(&self) -> Option<FamilyId> {
        self.family
    }

    pub(crate) fn set_family(&mut self, family: FamilyId) {
        self.family = Some(family);
    }

    /// Whether this block is a variant of `family`.
    pub fn is(&self, family: FamilyId) -> bool {
        self.family == Some(family)
    }

    pub fn cull_against(&self) -> bool {
        self.cull_against
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn states(&self) -> &StateMap {
        &self.states
    }

    pub fn state(&self, key: &str) -> Option<&StateValue> {
        self.states.get(key)
    }

    pub fn model_name(&self) -> String {
        self.kind.model_name(&self.name, &self.states)
    }

    pub fn model_variant(&self) -> String {
        self.kind.model_variant(&self.states)
    }

    pub fn data_offset(&self) -> DataOffset {
        self.kind.data_offset(&self.states)
    }

    /// `plugin:name[key=value,...]`, or just `plugin:name` without state.
    pub fn full_name(&self) -> String {
        if self.states.is_empty() {
            return self.to_string();
        }
        let states: Vec<String> = self
            .states
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        format!("{self}[{}]", states.join(","))
    }

    /// Assign a state value, checked against the axes the kind declares.
    pub fn set_state(&mut self, key: &str, value: StateValue) -> Result<(), BlockError> {
        if self.kind.is_stateless() {
            return Err(BlockError::UnsupportedOperation {
                block: self.to_string(),
                key: key.to_owned(),
            });
        }
        let axis = self.kind.axis(key).ok_or_else(|| BlockError::UnknownState {
            block: self.to_string(),
            key: key.to_owned(),
        })?;
        if axis.position(&value).is_none() {
            if let Some(expected) = axis.value_type().filter(|ty| *ty != value.ty()) {
                return Err(BlockError::StateTypeMismatch {
                    block: self.to_string(),
                    key: key.to_owned(),
                    expected,
                    got: value.ty(),
                });
            }
            return Err(BlockError::ValueOutOfDomain {
                block: self.to_string(),
                key: key.to_owned(),
                value: value.to_string(),
            });
        }
        self.states.insert(key.to_owned(), value);
        Ok(())
    }
}

impl fmt::Display for BlockDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.plugin, self.name)
    }
}

/// Split `plugin:name`, defaulting the plugin.
pub fn split_identifier(identifier: &str) -> Result<(&str, &str), BlockError> {
    let (plugin, name) = identifier
        .split_once(':')
        .unwrap_or((DEFAULT_PLUGIN, identifier));
    if plugin.is_empty() || name.is_empty() || name.contains(':') {
        return Err(BlockError::InvalidIdentifier(identifier.to_owned()));
    }
    Ok((plugin, name))
}
