// THEORY:
// The `FoodCatalog` is reference data, not logic. Each `FoodSignature` is a flat
// record of what a food is expected to look like (a few reference colors and
// shape tags) and how long it keeps. Matching is table-driven: the engine runs
// the same scoring rules over every row, so adding a food is a data change.
//
// The built-in table is assembled once per process behind a `OnceLock` and
// handed out by reference. Custom catalogs can be built in code or loaded from
// JSON with the same record layout.

use crate::core_modules::color_profiler::to_hex;
use crate::core_modules::pixel::pixel::Channel;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

static BUILTIN_CATALOG: OnceLock<FoodCatalog> = OnceLock::new();

/// Coarse shape descriptors. Only `Round`, `Elongated` and `Clustered` have a
/// scoring rule; the rest are descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeTag {
    Round,
    Oval,
    Elongated,
    Curved,
    Clustered,
    TreeLike,
    Tapered,
    BellShaped,
    Blocky,
    Cylindrical,
    Small,
}

/// A reference color stored as its RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceColor {
    pub red: Channel,
    pub green: Channel,
    pub blue: Channel,
}

impl ReferenceColor {
    pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
        Self { red, green, blue }
    }

    pub fn hex(&self) -> String {
        to_hex(self.red, self.green, self.blue)
    }

    pub fn rgb(&self) -> [Channel; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Static description of one catalog food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSignature {
    /// Catalog key, lowercase.
    pub name: String,
    pub colors: Vec<ReferenceColor>,
    pub shapes: Vec<ShapeTag>,
    /// Shelf-life baseline in days.
    pub days_to_expiration: u32,
    /// Plural noun used for quantity labels, e.g. "heads of broccoli".
    pub quantity_noun: String,
}

impl FoodSignature {
    pub fn new(
        name: impl Into<String>,
        colors: &[ReferenceColor],
        shapes: &[ShapeTag],
        days_to_expiration: u32,
        quantity_noun: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            colors: colors.to_vec(),
            shapes: shapes.to_vec(),
            days_to_expiration,
            quantity_noun: quantity_noun.into(),
        }
    }

    pub fn has_shape(&self, tag: ShapeTag) -> bool {
        self.shapes.contains(&tag)
    }

    /// Human label for an estimated count, e.g. "2 apples".
    pub fn quantity_label(&self, count: u32) -> String {
        format!("{count} {}", self.quantity_noun)
    }

    /// Catalog key with its first letter upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Ordered, read-only set of food signatures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodCatalog {
    entries: Vec<FoodSignature>,
}

impl FoodCatalog {
    pub fn new(entries: Vec<FoodSignature>) -> Self {
        Self { entries }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static FoodCatalog {
        BUILTIN_CATALOG.get_or_init(|| FoodCatalog::new(builtin_entries()))
    }

    /// Loads a catalog from a JSON array of signatures.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AnalysisError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|source| AnalysisError::ConfigParse { source })
    }

    pub fn get(&self, name: &str) -> Option<&FoodSignature> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodSignature> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const RED: ReferenceColor = ReferenceColor::new(0xff, 0x44, 0x44);
const AMBER: ReferenceColor = ReferenceColor::new(0xff, 0xaa, 0x44);
const GREEN: ReferenceColor = ReferenceColor::new(0x44, 0xff, 0x44);
const YELLOW: ReferenceColor = ReferenceColor::new(0xff, 0xff, 0x44);
const ORANGE: ReferenceColor = ReferenceColor::new(0xff, 0x88, 0x44);
const RED_ORANGE: ReferenceColor = ReferenceColor::new(0xff, 0x66, 0x44);
const LIGHT_GREEN: ReferenceColor = ReferenceColor::new(0x66, 0xff, 0x66);
const DEEP_GREEN: ReferenceColor = ReferenceColor::new(0x22, 0x88, 0x44);
const PALE_YELLOW: ReferenceColor = ReferenceColor::new(0xff, 0xff, 0x88);
const CREAM_YELLOW: ReferenceColor = ReferenceColor::new(0xff, 0xff, 0xaa);
const MINT_GREEN: ReferenceColor = ReferenceColor::new(0x88, 0xff, 0x88);

fn builtin_entries() -> Vec<FoodSignature> {
    use ShapeTag::*;
    vec![
        FoodSignature::new("apple", &[RED, AMBER, GREEN, YELLOW], &[Round, Oval], 30, "apples"),
        FoodSignature::new("bananas", &[YELLOW, AMBER, GREEN], &[Elongated, Curved], 7, "bananas"),
        FoodSignature::new("orange", &[ORANGE, AMBER, RED_ORANGE], &[Round], 14, "oranges"),
        FoodSignature::new("tomato", &[RED, RED_ORANGE, ORANGE], &[Round], 7, "tomatoes"),
        FoodSignature::new(
            "broccoli",
            &[GREEN, LIGHT_GREEN, DEEP_GREEN],
            &[Clustered, TreeLike],
            7,
            "heads of broccoli",
        ),
        FoodSignature::new(
            "carrot",
            &[ORANGE, AMBER, RED_ORANGE],
            &[Elongated, Tapered],
            21,
            "carrots",
        ),
        FoodSignature::new(
            "bell pepper",
            &[RED, YELLOW, GREEN, ORANGE],
            &[BellShaped, Blocky],
            10,
            "bell peppers",
        ),
        FoodSignature::new(
            "cucumber",
            &[GREEN, LIGHT_GREEN, DEEP_GREEN],
            &[Elongated, Cylindrical],
            10,
            "cucumbers",
        ),
        FoodSignature::new(
            "lemon",
            &[YELLOW, PALE_YELLOW, CREAM_YELLOW],
            &[Oval, Elongated],
            14,
            "lemons",
        ),
        FoodSignature::new("lime", &[GREEN, LIGHT_GREEN, MINT_GREEN], &[Round, Small], 10, "limes"),
    ]
}
