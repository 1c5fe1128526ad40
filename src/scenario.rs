//! Scenario catalog and classification
//!
//! A scenario names an energy/comfort outcome. The catalog is fixed: four
//! entries, ids 1-4, never mutated at runtime.

use std::fmt;

use crate::error::UnknownScenario;

/// Identifier of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScenarioId {
    Optimal = 1,
    InefficientEnergy = 2,
    ThermalOverdrive = 3,
    ThermalNeglect = 4,
}

impl ScenarioId {
    /// All ids in catalog order (later entries draw on top)
    pub const ALL: [ScenarioId; 4] = [
        ScenarioId::Optimal,
        ScenarioId::InefficientEnergy,
        ScenarioId::ThermalOverdrive,
        ScenarioId::ThermalNeglect,
    ];

    /// Numeric code used by the year dataset
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Position in [`CATALOG`]
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    /// Column name used by the hourly dataset (underscored)
    pub fn column_key(self) -> &'static str {
        match self {
            ScenarioId::Optimal => "Optimal",
            ScenarioId::InefficientEnergy => "Inefficient_Energy",
            ScenarioId::ThermalOverdrive => "Thermal_Overdrive",
            ScenarioId::ThermalNeglect => "Thermal_Neglect",
        }
    }

    pub fn definition(self) -> &'static ScenarioDefinition {
        &CATALOG[self.index()]
    }

    /// Resolve a scenario by numeric code, column key or label (case-insensitive)
    pub fn lookup(name: &str) -> Option<ScenarioId> {
        let name = name.trim();
        if let Ok(code) = name.parse::<i64>() {
            return ScenarioId::try_from(code).ok();
        }
        let wanted = name.replace(['_', '-'], " ").to_lowercase();
        ScenarioId::ALL
            .into_iter()
            .find(|id| id.definition().label.to_lowercase() == wanted)
    }
}

impl TryFrom<i64> for ScenarioId {
    type Error = UnknownScenario;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ScenarioId::Optimal),
            2 => Ok(ScenarioId::InefficientEnergy),
            3 => Ok(ScenarioId::ThermalOverdrive),
            4 => Ok(ScenarioId::ThermalNeglect),
            other => Err(UnknownScenario(other)),
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.definition().label)
    }
}

/// Immutable catalog entry
#[derive(Debug, PartialEq, Eq)]
pub struct ScenarioDefinition {
    pub id: ScenarioId,
    pub label: &'static str,
    pub definition: &'static str,
    /// Swatch color for legends and controls
    pub foreground: &'static str,
    /// Translucent fill behind the chart
    pub background: &'static str,
}

impl ScenarioDefinition {
    /// Background fill composited over white, as opaque RGB.
    ///
    /// `None` when the fill is not an `rgba(r, g, b, a)` value.
    pub fn swatch_rgb(&self) -> Option<(u8, u8, u8)> {
        let inner = self.background.strip_prefix("rgba(")?.strip_suffix(')')?;
        let parts: Vec<f64> = inner
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        let &[r, g, b, alpha] = parts.as_slice() else {
            return None;
        };
        let alpha = alpha.clamp(0.0, 1.0);
        let blend = |c: f64| (c * alpha + 255.0 * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8;
        Some((blend(r), blend(g), blend(b)))
    }
}

pub const CATALOG: [ScenarioDefinition; 4] = [
    ScenarioDefinition {
        id: ScenarioId::Optimal,
        label: "Optimal",
        definition: "✓ Low energy, ✓ High comfort",
        foreground: "#D6F2E2",
        background: "rgba(59, 154, 111, 0.3)",
    },
    ScenarioDefinition {
        id: ScenarioId::InefficientEnergy,
        label: "Inefficient Energy",
        definition: "✗ High energy, ✗ Low comfort",
        foreground: "#FDE2E1",
        background: "rgba(251, 47, 47, 0.3)",
    },
    ScenarioDefinition {
        id: ScenarioId::ThermalOverdrive,
        label: "Thermal Overdrive",
        definition: "✗ High energy, ✓ High comfort",
        foreground: "#D6A851",
        background: "rgba(255, 202, 105, 0.35)",
    },
    ScenarioDefinition {
        id: ScenarioId::ThermalNeglect,
        label: "Thermal Neglect",
        definition: "✓ Low energy, ✗ Low comfort",
        foreground: "#BDBDBD",
        background: "rgba(189, 189, 189, 0.3)",
    },
];

/// Look up a catalog entry by numeric code
pub fn describe(code: i64) -> Result<&'static ScenarioDefinition, UnknownScenario> {
    ScenarioId::try_from(code).map(ScenarioId::definition)
}

/// Set of scenarios satisfied by one hourly reading.
///
/// Hourly flags come from independent columns, so membership may overlap or be
/// empty. No precedence is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScenarioSet(u8);

impl ScenarioSet {
    pub const EMPTY: ScenarioSet = ScenarioSet(0);

    pub fn insert(&mut self, id: ScenarioId) {
        self.0 |= 1 << id.index();
    }

    pub fn contains(&self, id: ScenarioId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in catalog order
    pub fn iter(&self) -> impl Iterator<Item = ScenarioId> + '_ {
        ScenarioId::ALL.into_iter().filter(|id| self.contains(*id))
    }
}

impl FromIterator<ScenarioId> for ScenarioSet {
    fn from_iter<I: IntoIterator<Item = ScenarioId>>(iter: I) -> Self {
        let mut set = ScenarioSet::EMPTY;
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Classify an hourly row from its per-scenario flag cells.
///
/// `flag(id)` returns the raw cell for that scenario's column, if any. Only
/// the exact text "1" counts as set.
pub fn classify_flags<'a, F>(flag: F) -> ScenarioSet
where
    F: Fn(ScenarioId) -> Option<&'a str>,
{
    ScenarioId::ALL
        .into_iter()
        .filter(|id| flag(*id).map(str::trim) == Some("1"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_match_positions() {
        for (i, entry) in CATALOG.iter().enumerate() {
            assert_eq!(entry.id.index(), i);
            assert_eq!(entry.id.code() as usize, i + 1);
        }
    }

    #[test]
    fn test_swatch_blends_background_over_white() {
        assert_eq!(CATALOG[0].swatch_rgb(), Some((196, 225, 212)));
        assert_eq!(CATALOG[3].swatch_rgb(), Some((235, 235, 235)));
        for entry in &CATALOG {
            assert!(entry.swatch_rgb().is_some(), "{}", entry.label);
        }
    }

    #[test]
    fn test_describe_known_and_unknown() {
        assert_eq!(describe(3).unwrap().label, "Thermal Overdrive");
        assert_eq!(describe(0), Err(UnknownScenario(0)));
        assert_eq!(describe(5), Err(UnknownScenario(5)));
    }

    #[test]
    fn test_column_key_renders_as_label() {
        for id in ScenarioId::ALL {
            assert_eq!(id.column_key().replace('_', " "), id.definition().label);
        }
    }

    #[test]
    fn test_classify_flags_keeps_overlap() {
        let set = classify_flags(|id| match id {
            ScenarioId::Optimal => Some("1"),
            ScenarioId::ThermalOverdrive => Some("1"),
            ScenarioId::ThermalNeglect => Some("0"),
            ScenarioId::InefficientEnergy => None,
        });
        assert_eq!(set.len(), 2);
        assert!(set.contains(ScenarioId::Optimal));
        assert!(set.contains(ScenarioId::ThermalOverdrive));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![ScenarioId::Optimal, ScenarioId::ThermalOverdrive]
        );
    }

    #[test]
    fn test_classify_flags_empty() {
        let set = classify_flags(|_| Some("true"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_lookup_by_name_or_code() {
        assert_eq!(ScenarioId::lookup("2"), Some(ScenarioId::InefficientEnergy));
        assert_eq!(ScenarioId::lookup("thermal_neglect"), Some(ScenarioId::ThermalNeglect));
        assert_eq!(ScenarioId::lookup("Thermal Overdrive"), Some(ScenarioId::ThermalOverdrive));
        assert_eq!(ScenarioId::lookup("9"), None);
        assert_eq!(ScenarioId::lookup("cozy"), None);
    }
}
