//! Static material factor table. Quantities are thumb rules normalised from
//! a 1000 sq ft reference build.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit a material quantity is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Bag,
    Ton,
    M3,
    Brick,
    Tile,
    Litre,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Bag => "bag",
            Unit::Ton => "ton",
            Unit::M3 => "m3",
            Unit::Brick => "brick",
            Unit::Tile => "tile",
            Unit::Litre => "litre",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for every material the estimator knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKey {
    Cement,
    Steel,
    Sand,
    Aggregate,
    Brick,
    Tile,
    Paint,
}

impl MaterialKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKey::Cement => "cement",
            MaterialKey::Steel => "steel",
            MaterialKey::Sand => "sand",
            MaterialKey::Aggregate => "aggregate",
            MaterialKey::Brick => "brick",
            MaterialKey::Tile => "tile",
            MaterialKey::Paint => "paint",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        MATERIAL_FACTORS
            .iter()
            .map(|factor| factor.key)
            .find(|key| key.as_str() == raw)
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary unit a base quantity can be converted into.
#[derive(Clone, Copy, Debug)]
pub struct AlternateUnit {
    pub unit: Unit,
    /// Receives the quantity in the material's base unit.
    pub convert: fn(f64) -> f64,
}

#[derive(Clone, Copy, Debug)]
pub struct MaterialFactor {
    pub key: MaterialKey,
    pub label: &'static str,
    pub label_hi: &'static str,
    /// Base-unit quantity needed per square foot of floor area.
    pub factor_per_sqft: f64,
    pub default_unit: Unit,
    pub alternate_units: &'static [AlternateUnit],
}

/// 81.6 t of sand occupies 51 m3.
pub fn sand_tons_to_cubic_metres(tons: f64) -> f64 {
    tons * (51.0 / 81.6)
}

/// 60.8 t of aggregate occupies 25.3 m3.
pub fn aggregate_tons_to_cubic_metres(tons: f64) -> f64 {
    tons * (25.3 / 60.8)
}

/// Canonical material ordering. Every view and export follows this order.
pub const MATERIAL_FACTORS: [MaterialFactor; 7] = [
    MaterialFactor {
        key: MaterialKey::Cement,
        label: "Cement",
        label_hi: "सीमेंट",
        factor_per_sqft: 0.4,
        default_unit: Unit::Bag,
        alternate_units: &[],
    },
    MaterialFactor {
        key: MaterialKey::Steel,
        label: "Steel (Saria)",
        label_hi: "सरिया",
        factor_per_sqft: 0.004,
        default_unit: Unit::Ton,
        alternate_units: &[],
    },
    MaterialFactor {
        key: MaterialKey::Sand,
        label: "Sand",
        label_hi: "रेत",
        factor_per_sqft: 0.0816,
        default_unit: Unit::Ton,
        alternate_units: &[AlternateUnit {
            unit: Unit::M3,
            convert: sand_tons_to_cubic_metres,
        }],
    },
    MaterialFactor {
        key: MaterialKey::Aggregate,
        label: "Aggregate",
        label_hi: "ऐग्रीगेट",
        factor_per_sqft: 0.0608,
        default_unit: Unit::Ton,
        alternate_units: &[AlternateUnit {
            unit: Unit::M3,
            convert: aggregate_tons_to_cubic_metres,
        }],
    },
    MaterialFactor {
        key: MaterialKey::Brick,
        label: "Brick",
        label_hi: "ईंट",
        factor_per_sqft: 8.0,
        default_unit: Unit::Brick,
        alternate_units: &[],
    },
    MaterialFactor {
        key: MaterialKey::Tile,
        label: "Tile",
        label_hi: "टाइल",
        factor_per_sqft: 1.3,
        default_unit: Unit::Tile,
        alternate_units: &[],
    },
    MaterialFactor {
        key: MaterialKey::Paint,
        label: "Paint",
        label_hi: "पेंट",
        factor_per_sqft: 0.018,
        default_unit: Unit::Litre,
        alternate_units: &[],
    },
];

/// Market rates used until the user edits them (currency per default unit).
pub const DEFAULT_RATES: [(MaterialKey, f64); 7] = [
    (MaterialKey::Cement, 380.0),
    (MaterialKey::Steel, 65000.0),
    (MaterialKey::Sand, 1500.0),
    (MaterialKey::Aggregate, 1300.0),
    (MaterialKey::Brick, 8.0),
    (MaterialKey::Tile, 35.0),
    (MaterialKey::Paint, 250.0),
];

pub fn factor_for(key: MaterialKey) -> &'static MaterialFactor {
    // The table holds exactly one entry per key, in declaration order.
    &MATERIAL_FACTORS[key as usize]
}
