use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid land form: '{0}'")]
pub struct ParseLandFormError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid land cover: '{0}'")]
pub struct ParseLandCoverError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catchment category: '{0}'")]
pub struct ParseCategoryError(String);

/// Terrain relief class of a catchment, ordered from flattest to steepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LandForm {
    MarshesAndLowlands,
    FlatsAndPlateaus,
    FlatsAndPlateausInCombinationWithHills,
    HillsWithGentleSlopes,
    SteeperHillsAndFoothills,
    HillsAndOutcropsOfMountainRanges,
    HigherHills,
    Mountains,
    HighestMountains,
}

impl LandForm {
    pub const ALL: [LandForm; 9] = [
        LandForm::MarshesAndLowlands,
        LandForm::FlatsAndPlateaus,
        LandForm::FlatsAndPlateausInCombinationWithHills,
        LandForm::HillsWithGentleSlopes,
        LandForm::SteeperHillsAndFoothills,
        LandForm::HillsAndOutcropsOfMountainRanges,
        LandForm::HigherHills,
        LandForm::Mountains,
        LandForm::HighestMountains,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LandForm::MarshesAndLowlands => "marshes_and_lowlands",
            LandForm::FlatsAndPlateaus => "flats_and_plateaus",
            LandForm::FlatsAndPlateausInCombinationWithHills => {
                "flats_and_plateaus_in_combination_with_hills"
            }
            LandForm::HillsWithGentleSlopes => "hills_with_gentle_slopes",
            LandForm::SteeperHillsAndFoothills => "steeper_hills_and_foothills",
            LandForm::HillsAndOutcropsOfMountainRanges => "hills_and_outcrops_of_mountain_ranges",
            LandForm::HigherHills => "higher_hills",
            LandForm::Mountains => "mountains",
            LandForm::HighestMountains => "highest_mountains",
        }
    }
}

impl fmt::Display for LandForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandForm {
    type Err = ParseLandFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        LandForm::ALL
            .into_iter()
            .find(|form| form.name() == normalized)
            .ok_or_else(|| ParseLandFormError(s.to_string()))
    }
}

/// Surface cover class of a catchment.
///
/// The first six variants describe terrain conditions, the next seven are
/// land-use classes that map one-to-one onto a [`CatchmentCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandCover {
    MediumConditions,
    PermeableAreas,
    PermeableTerrainOnPlains,
    Hilly,
    Mountains,
    BareRockySlopes,
    Urban,
    Suburban,
    Rural,
    Forests,
    Meadows,
    Arable,
    Marshes,
}

impl LandCover {
    pub const ALL: [LandCover; 13] = [
        LandCover::MediumConditions,
        LandCover::PermeableAreas,
        LandCover::PermeableTerrainOnPlains,
        LandCover::Hilly,
        LandCover::Mountains,
        LandCover::BareRockySlopes,
        LandCover::Urban,
        LandCover::Suburban,
        LandCover::Rural,
        LandCover::Forests,
        LandCover::Meadows,
        LandCover::Arable,
        LandCover::Marshes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LandCover::MediumConditions => "medium_conditions",
            LandCover::PermeableAreas => "permeable_areas",
            LandCover::PermeableTerrainOnPlains => "permeable_terrain_on_plains",
            LandCover::Hilly => "hilly",
            LandCover::Mountains => "mountains",
            LandCover::BareRockySlopes => "bare_rocky_slopes",
            LandCover::Urban => "urban",
            LandCover::Suburban => "suburban",
            LandCover::Rural => "rural",
            LandCover::Forests => "forests",
            LandCover::Meadows => "meadows",
            LandCover::Arable => "arable",
            LandCover::Marshes => "marshes",
        }
    }
}

impl fmt::Display for LandCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LandCover {
    type Err = ParseLandCoverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        LandCover::ALL
            .into_iter()
            .find(|cover| cover.name() == normalized)
            .ok_or_else(|| ParseLandCoverError(s.to_string()))
    }
}

/// Discrete land-cover bucket used to index the subarea parameter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatchmentCategory {
    Urban,
    Suburban,
    Rural,
    Forests,
    Meadows,
    Arable,
    Mountains,
}

impl CatchmentCategory {
    pub const ALL: [CatchmentCategory; 7] = [
        CatchmentCategory::Urban,
        CatchmentCategory::Suburban,
        CatchmentCategory::Rural,
        CatchmentCategory::Forests,
        CatchmentCategory::Meadows,
        CatchmentCategory::Arable,
        CatchmentCategory::Mountains,
    ];

    /// Table key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            CatchmentCategory::Urban => "urban",
            CatchmentCategory::Suburban => "suburban",
            CatchmentCategory::Rural => "rural",
            CatchmentCategory::Forests => "forests",
            CatchmentCategory::Meadows => "meadows",
            CatchmentCategory::Arable => "arable",
            CatchmentCategory::Mountains => "mountains",
        }
    }
}

impl fmt::Display for CatchmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CatchmentCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatchmentCategory::ALL
            .into_iter()
            .find(|category| category.key() == s.trim())
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn land_form_from_str_accepts_snake_and_kebab_case() {
        assert_eq!(
            LandForm::from_str("hills_with_gentle_slopes").unwrap(),
            LandForm::HillsWithGentleSlopes
        );
        assert_eq!(
            LandForm::from_str("Highest-Mountains").unwrap(),
            LandForm::HighestMountains
        );
    }

    #[test]
    fn land_form_from_str_rejects_values_outside_the_enumeration() {
        let err = LandForm::from_str("plains").unwrap_err();
        assert_eq!(err.to_string(), "invalid land form: 'plains'");
    }

    #[test]
    fn land_cover_names_roundtrip_through_display() {
        for cover in LandCover::ALL {
            assert_eq!(LandCover::from_str(&cover.to_string()).unwrap(), cover);
        }
    }

    #[test]
    fn land_cover_from_str_invalid() {
        let err = LandCover::from_str("desert").unwrap_err();
        assert_eq!(err.to_string(), "invalid land cover: 'desert'");
    }

    #[test]
    fn category_keys_are_the_seven_table_keys() {
        let keys: Vec<_> = CatchmentCategory::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec![
                "urban",
                "suburban",
                "rural",
                "forests",
                "meadows",
                "arable",
                "mountains"
            ]
        );
    }

    #[test]
    fn category_from_str_is_exact() {
        assert_eq!(
            CatchmentCategory::from_str("forests").unwrap(),
            CatchmentCategory::Forests
        );
        assert!(CatchmentCategory::from_str("Forests").is_err());
        assert!(CatchmentCategory::from_str("marshes").is_err());
    }
}
