//! Block kinds: which state axes a block accepts and how its states map to a
//! legacy data value and a model.

use std::sync::{Arc, OnceLock};

use crate::combined::DataOffset;
use crate::error::BlockError;
use crate::state::{Axis, StateAxis, StateMap, StateType};

pub const STONE_VARIANTS: &[&str] = &[
    "stone",
    "granite",
    "smooth_granite",
    "diorite",
    "smooth_diorite",
    "andesite",
    "smooth_andesite",
];

pub const WOOD_TYPES: &[&str] = &["oak", "spruce", "birch", "jungle", "acacia", "dark_oak"];

/// The first log/leaves block only carries four wood types.
pub const LOG_VARIANTS: &[&str] = &["oak", "spruce", "birch", "jungle"];

pub const LOG_AXES: &[&str] = &["y", "x", "z", "none"];

pub const SAND_VARIANTS: &[&str] = &["sand", "red_sand"];

/// Dye colours in metadata order.
pub const COLORS: &[&str] = &[
    "white",
    "orange",
    "magenta",
    "light_blue",
    "yellow",
    "lime",
    "pink",
    "gray",
    "silver",
    "cyan",
    "purple",
    "blue",
    "brown",
    "green",
    "red",
    "black",
];

/// Facings in metadata order. Furnaces only store the horizontal ones (2..=5).
pub const FACINGS: &[&str] = &["down", "up", "north", "south", "west", "east"];

pub const SLAB_VARIANTS: &[&str] = &[
    "stone",
    "sandstone",
    "wood_old",
    "cobblestone",
    "brick",
    "stone_brick",
    "nether_brick",
    "quartz",
];

pub const SLAB_HALVES: &[&str] = &["bottom", "top"];

/// A lazily built axis table shared by every block of one built-in kind.
macro_rules! static_axes {
    ($($axis:expr),+ $(,)?) => {{
        static AXES: OnceLock<Vec<Axis>> = OnceLock::new();
        AXES.get_or_init(|| vec![$($axis),+]).as_slice()
    }};
}

/// The closed set of block kinds.
///
/// Every kind shares the [`BlockDescriptor`](crate::BlockDescriptor) record;
/// the kind only contributes its declared axes and the state encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// No state. Only ever occupies data offset 0.
    Plain,
    Stone,
    /// `snowy` is derived from the block above, so only `snowy=false` is stored.
    Grass,
    Planks,
    Sapling,
    /// Water and lava: `level` 0..=15.
    Liquid,
    Sand,
    Log,
    Leaves,
    Sponge,
    /// Wool, stained glass, carpet: one of 16 dye colours.
    Colored,
    Furnace,
    Slab,
    /// Axes declared at runtime. States pack in declaration order, first axis
    /// least significant, which matches the order [`expand`] produces them in.
    ///
    /// [`expand`]: crate::BlockFamily::expand
    Custom(Arc<[Axis]>),
}

impl BlockKind {
    /// Build a custom kind, rejecting empty or mixed-type domains and keys
    /// declared twice.
    pub fn custom(axes: Vec<Axis>) -> Result<Self, BlockError> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|earlier| earlier.key() == axis.key()) {
                return Err(BlockError::DuplicateState {
                    key: axis.key().to_owned(),
                });
            }
            let Some(expected) = axis.value_type() else {
                return Err(BlockError::EmptyDomain {
                    key: axis.key().to_owned(),
                });
            };
            if let Some(bad) = axis.values().iter().find(|v| v.ty() != expected) {
                return Err(BlockError::StateTypeMismatch {
                    block: "custom".to_owned(),
                    key: axis.key().to_owned(),
                    expected,
                    got: bad.ty(),
                });
            }
        }
        Ok(BlockKind::Custom(axes.into()))
    }

    /// Axes this kind accepts, in the order they should be expanded.
    pub fn axes(&self) -> &[Axis] {
        match self {
            BlockKind::Plain => &[],
            BlockKind::Stone => static_axes![Axis::strings("variant", STONE_VARIANTS)],
            BlockKind::Grass => static_axes![Axis::boolean("snowy")],
            BlockKind::Planks => static_axes![Axis::strings("variant", WOOD_TYPES)],
            BlockKind::Sapling => static_axes![
                Axis::strings("type", WOOD_TYPES),
                Axis::int_range("stage", 0..=1),
            ],
            BlockKind::Liquid => static_axes![Axis::int_range("level", 0..=15)],
            BlockKind::Sand => static_axes![Axis::strings("variant", SAND_VARIANTS)],
            BlockKind::Log => static_axes![
                Axis::strings("variant", LOG_VARIANTS),
                Axis::strings("axis", LOG_AXES),
            ],
            BlockKind::Leaves => static_axes![
                Axis::strings("variant", LOG_VARIANTS),
                Axis::boolean("decayable"),
                Axis::boolean("check_decay"),
            ],
            BlockKind::Sponge => static_axes![Axis::boolean("wet")],
            BlockKind::Colored => static_axes![Axis::strings("color", COLORS)],
            BlockKind::Furnace => static_axes![Axis::strings("facing", FACINGS)],
            BlockKind::Slab => static_axes![
                Axis::strings("variant", SLAB_VARIANTS),
                Axis::strings("half", SLAB_HALVES),
            ],
            BlockKind::Custom(axes) => &axes[..],
        }
    }

    pub fn axis(&self, key: &str) -> Option<&Axis> {
        self.axes().iter().find(|axis| axis.key() == key)
    }

    pub fn is_stateless(&self) -> bool {
        match self {
            BlockKind::Plain => true,
            BlockKind::Custom(axes) => axes.is_empty(),
            _ => false,
        }
    }

    /// Whether families of this kind place every variant by data offset.
    pub fn has_data(&self) -> bool {
        !self.is_stateless()
    }

    /// Type of the values `key` accepts.
    pub fn state_type(&self, key: &str) -> Option<StateType> {
        self.axis(key).and_then(Axis::value_type)
    }

    pub fn data_offset(&self, states: &StateMap) -> DataOffset {
        let idx = |key: &str| self.index(states, key);
        let packed = match self {
            BlockKind::Plain => 0,
            BlockKind::Stone | BlockKind::Planks | BlockKind::Sand => idx("variant"),
            BlockKind::Grass => {
                if idx("snowy") != 0 {
                    return DataOffset::NotAddressable;
                }
                0
            }
            BlockKind::Sapling => idx("type") | idx("stage") << 3,
            BlockKind::Liquid => idx("level"),
            BlockKind::Log => idx("variant") | idx("axis") << 2,
            BlockKind::Leaves => {
                let no_decay = usize::from(idx("decayable") == 0);
                idx("variant") | no_decay << 2 | idx("check_decay") << 3
            }
            BlockKind::Sponge => idx("wet"),
            BlockKind::Colored => idx("color"),
            BlockKind::Furnace => match idx("facing") {
                0 | 1 => return DataOffset::NotAddressable,
                facing => facing,
            },
            BlockKind::Slab => idx("variant") | idx("half") << 3,
            BlockKind::Custom(axes) => {
                let mut packed: usize = 0;
                let mut radix: usize = 1;
                for axis in axes.iter() {
                    let index = self.index(states, axis.key());
                    packed = packed.saturating_add(index.saturating_mul(radix));
                    radix = radix.saturating_mul(axis.len());
                }
                packed
            }
        };
        DataOffset::At(u8::try_from(packed).unwrap_or(u8::MAX))
    }

    pub fn model_name(&self, name: &str, states: &StateMap) -> String {
        let value = |key: &str| self.value(states, key);
        match self {
            BlockKind::Stone | BlockKind::Sand => value("variant"),
            BlockKind::Planks => format!("{}_planks", value("variant")),
            BlockKind::Sapling => format!("{}_sapling", value("type")),
            BlockKind::Log => format!("{}_log", value("variant")),
            BlockKind::Leaves => format!("{}_leaves", value("variant")),
            BlockKind::Slab => format!("{}_slab", value("variant")),
            BlockKind::Colored => format!("{}_{name}", value("color")),
            _ => name.to_owned(),
        }
    }

    /// `key=value` pairs for the states not already folded into the model
    /// name, or `"normal"` if there are none.
    pub fn model_variant(&self, states: &StateMap) -> String {
        let mut keys: Vec<&str> = match self {
            BlockKind::Plain
            | BlockKind::Stone
            | BlockKind::Planks
            | BlockKind::Sand
            | BlockKind::Leaves
            | BlockKind::Colored => Vec::new(),
            BlockKind::Grass => vec!["snowy"],
            BlockKind::Sapling => vec!["stage"],
            BlockKind::Liquid => vec!["level"],
            BlockKind::Log => vec!["axis"],
            BlockKind::Sponge => vec!["wet"],
            BlockKind::Furnace => vec!["facing"],
            BlockKind::Slab => vec!["half"],
            BlockKind::Custom(axes) => axes.iter().map(|axis| axis.key()).collect(),
        };
        if keys.is_empty() {
            return "normal".to_owned();
        }
        keys.sort_unstable();
        keys.iter()
            .map(|key| format!("{key}={}", self.value(states, key)))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Domain index of the current value of `key`; unset states read as the
    /// first value.
    fn index(&self, states: &StateMap, key: &str) -> usize {
        match (self.axis(key), states.get(key)) {
            (Some(axis), Some(value)) => axis.position(value).unwrap_or(0),
            _ => 0,
        }
    }

    fn value(&self, states: &StateMap, key: &str) -> String {
        if let Some(value) = states.get(key) {
            return value.to_string();
        }
        self.axis(key)
            .and_then(|axis| axis.values().first().map(ToString::to_string))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateValue;

    fn states(pairs: &[(&str, StateValue)]) -> StateMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn plain_is_stateless() {
        assert!(BlockKind::Plain.is_stateless());
        assert!(!BlockKind::Plain.has_data());
        assert!(BlockKind::Plain.axes().is_empty());
        assert_eq!(
            BlockKind::Plain.data_offset(&StateMap::new()),
            DataOffset::At(0)
        );
        assert_eq!(BlockKind::Plain.model_variant(&StateMap::new()), "normal");
    }

    #[test]
    fn log_packs_axis_above_variant() {
        let s = states(&[("variant", "birch".into()), ("axis", "x".into())]);
        assert_eq!(BlockKind::Log.data_offset(&s), DataOffset::At(2 | 1 << 2));
        assert_eq!(BlockKind::Log.model_name("log", &s), "birch_log");
        assert_eq!(BlockKind::Log.model_variant(&s), "axis=x");
    }

    #[test]
    fn furnace_vertical_facings_are_not_addressable() {
        for facing in ["down", "up"] {
            let s = states(&[("facing", facing.into())]);
            assert_eq!(BlockKind::Furnace.data_offset(&s), DataOffset::NotAddressable);
        }
        let s = states(&[("facing", "east".into())]);
        assert_eq!(BlockKind::Furnace.data_offset(&s), DataOffset::At(5));
        assert_eq!(BlockKind::Furnace.model_variant(&s), "facing=east");
    }

    #[test]
    fn grass_snowy_is_derived() {
        let snowy = states(&[("snowy", true.into())]);
        let bare = states(&[("snowy", false.into())]);
        assert_eq!(BlockKind::Grass.data_offset(&snowy), DataOffset::NotAddressable);
        assert_eq!(BlockKind::Grass.data_offset(&bare), DataOffset::At(0));
    }

    #[test]
    fn leaves_decay_bits() {
        let s = states(&[
            ("variant", "spruce".into()),
            ("decayable", false.into()),
            ("check_decay", true.into()),
        ]);
        assert_eq!(BlockKind::Leaves.data_offset(&s), DataOffset::At(1 | 4 | 8));
        assert_eq!(BlockKind::Leaves.model_variant(&s), "normal");
    }

    #[test]
    fn colored_model_name() {
        let s = states(&[("color", "light_blue".into())]);
        assert_eq!(BlockKind::Colored.data_offset(&s), DataOffset::At(3));
        assert_eq!(BlockKind::Colored.model_name("wool", &s), "light_blue_wool");
    }

    #[test]
    fn unset_states_read_as_first_value() {
        let empty = StateMap::new();
        assert_eq!(BlockKind::Stone.model_name("stone", &empty), "stone");
        assert_eq!(BlockKind::Slab.model_variant(&empty), "half=bottom");
        assert_eq!(BlockKind::Liquid.data_offset(&empty), DataOffset::At(0));
    }

    #[test]
    fn custom_packs_first_axis_fastest() {
        let kind = BlockKind::custom(vec![
            Axis::boolean("lit"),
            Axis::strings("face", &["a", "b", "c"]),
        ])
        .unwrap();
        let s = states(&[("lit", true.into()), ("face", "c".into())]);
        assert_eq!(kind.data_offset(&s), DataOffset::At(1 + 2 * 2));
        assert_eq!(kind.model_variant(&s), "face=c,lit=true");
        assert_eq!(kind.state_type("lit"), Some(StateType::Bool));
    }

    #[test]
    fn custom_rejects_bad_domains() {
        assert_eq!(
            BlockKind::custom(vec![Axis::new("empty", Vec::new())]),
            Err(BlockError::EmptyDomain {
                key: "empty".into()
            })
        );
        let mixed = Axis::new("mixed", vec![StateValue::Int(1), StateValue::Bool(true)]);
        assert!(matches!(
            BlockKind::custom(vec![mixed]),
            Err(BlockError::StateTypeMismatch {
                expected: StateType::Int,
                got: StateType::Bool,
                ..
            })
        ));
        assert!(BlockKind::custom(Vec::new()).unwrap().is_stateless());
    }

    #[test]
    fn custom_rejects_repeated_keys() {
        assert_eq!(
            BlockKind::custom(vec![Axis::boolean("lit"), Axis::boolean("lit")]),
            Err(BlockError::DuplicateState { key: "lit".into() })
        );
        let distinct = BlockKind::custom(vec![Axis::boolean("lit"), Axis::boolean("powered")]);
        assert_eq!(distinct.unwrap().axes().len(), 2);
    }

    #[test]
    fn builtin_axes_are_shared() {
        let (log, other_log) = (BlockKind::Log, BlockKind::Log);
        let axes = log.axes();
        assert!(std::ptr::eq(axes, other_log.axes()));
        assert_eq!(axes[1].key(), "axis");
        assert!(std::ptr::eq(log.axis("axis").unwrap(), &axes[1]));
        assert_eq!(BlockKind::Slab.axis("half").unwrap().len(), 2);
        assert!(BlockKind::Slab.axis("facing").is_none());
    }
}
