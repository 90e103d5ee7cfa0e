use catchgen::{LandCover as LibLandCover, LandForm as LibLandForm};

use crate::cli;

impl From<cli::LandForm> for LibLandForm {
    fn from(value: cli::LandForm) -> Self {
        match value {
            cli::LandForm::MarshesAndLowlands => LibLandForm::MarshesAndLowlands,
            cli::LandForm::FlatsAndPlateaus => LibLandForm::FlatsAndPlateaus,
            cli::LandForm::FlatsAndPlateausInCombinationWithHills => {
                LibLandForm::FlatsAndPlateausInCombinationWithHills
            }
            cli::LandForm::HillsWithGentleSlopes => LibLandForm::HillsWithGentleSlopes,
            cli::LandForm::SteeperHillsAndFoothills => LibLandForm::SteeperHillsAndFoothills,
            cli::LandForm::HillsAndOutcropsOfMountainRanges => {
                LibLandForm::HillsAndOutcropsOfMountainRanges
            }
            cli::LandForm::HigherHills => LibLandForm::HigherHills,
            cli::LandForm::Mountains => LibLandForm::Mountains,
            cli::LandForm::HighestMountains => LibLandForm::HighestMountains,
        }
    }
}

impl From<cli::LandCover> for LibLandCover {
    fn from(value: cli::LandCover) -> Self {
        match value {
            cli::LandCover::MediumConditions => LibLandCover::MediumConditions,
            cli::LandCover::PermeableAreas => LibLandCover::PermeableAreas,
            cli::LandCover::PermeableTerrainOnPlains => LibLandCover::PermeableTerrainOnPlains,
            cli::LandCover::Hilly => LibLandCover::Hilly,
            cli::LandCover::Mountains => LibLandCover::Mountains,
            cli::LandCover::BareRockySlopes => LibLandCover::BareRockySlopes,
            cli::LandCover::Urban => LibLandCover::Urban,
            cli::LandCover::Suburban => LibLandCover::Suburban,
            cli::LandCover::Rural => LibLandCover::Rural,
            cli::LandCover::Forests => LibLandCover::Forests,
            cli::LandCover::Meadows => LibLandCover::Meadows,
            cli::LandCover::Arable => LibLandCover::Arable,
            cli::LandCover::Marshes => LibLandCover::Marshes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn cli_land_forms_cover_library_set() {
        let converted: Vec<LibLandForm> = cli::LandForm::value_variants()
            .iter()
            .map(|&v| v.into())
            .collect();
        assert_eq!(converted, LibLandForm::ALL.to_vec());
    }

    #[test]
    fn cli_land_covers_cover_library_set() {
        let converted: Vec<LibLandCover> = cli::LandCover::value_variants()
            .iter()
            .map(|&v| v.into())
            .collect();
        assert_eq!(converted, LibLandCover::ALL.to_vec());
    }

    #[test]
    fn cli_names_match_library_names() {
        for &variant in cli::LandCover::value_variants() {
            let name = variant.to_possible_value().unwrap().get_name().to_string();
            let lib: LibLandCover = variant.into();
            assert_eq!(name.replace('-', "_"), lib.name());
        }
    }
}
