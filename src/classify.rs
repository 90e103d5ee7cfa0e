//! Land classification: turns a land-form/land-cover pair into the continuous
//! estimates and the discrete category a new subcatchment is built from.
//!
//! The rules are a fixed table: relief determines the slope estimate, cover
//! determines imperviousness and the parameter category. Terrain-type covers
//! that are not categories themselves fall back to the closest category.

use crate::model::types::{CatchmentCategory, LandCover, LandForm};

/// Immutable result of classifying one catchment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Percent slope, 0–100.
    pub slope: f64,
    /// Percent impervious area, 0–100.
    pub impervious: f64,
    pub category: CatchmentCategory,
}

pub fn classify(land_form: LandForm, land_cover: LandCover) -> Classification {
    Classification {
        slope: slope_estimate(land_form).clamp(0.0, 100.0),
        impervious: impervious_estimate(land_cover).clamp(0.0, 100.0),
        category: category_of(land_cover),
    }
}

fn slope_estimate(land_form: LandForm) -> f64 {
    match land_form {
        LandForm::MarshesAndLowlands => 0.5,
        LandForm::FlatsAndPlateaus => 1.5,
        LandForm::FlatsAndPlateausInCombinationWithHills => 3.5,
        LandForm::HillsWithGentleSlopes => 7.5,
        LandForm::SteeperHillsAndFoothills => 12.5,
        LandForm::HillsAndOutcropsOfMountainRanges => 17.5,
        LandForm::HigherHills => 25.0,
        LandForm::Mountains => 35.0,
        LandForm::HighestMountains => 50.0,
    }
}

fn impervious_estimate(land_cover: LandCover) -> f64 {
    match land_cover {
        LandCover::MediumConditions => 10.0,
        LandCover::PermeableAreas => 3.0,
        LandCover::PermeableTerrainOnPlains => 5.0,
        LandCover::Hilly => 8.0,
        LandCover::Mountains => 5.0,
        LandCover::BareRockySlopes => 25.0,
        LandCover::Urban => 75.0,
        LandCover::Suburban => 45.0,
        LandCover::Rural => 20.0,
        LandCover::Forests => 2.0,
        LandCover::Meadows => 3.0,
        LandCover::Arable => 5.0,
        LandCover::Marshes => 1.0,
    }
}

fn category_of(land_cover: LandCover) -> CatchmentCategory {
    match land_cover {
        LandCover::Urban => CatchmentCategory::Urban,
        LandCover::Suburban => CatchmentCategory::Suburban,
        LandCover::Rural | LandCover::MediumConditions => CatchmentCategory::Rural,
        LandCover::Forests => CatchmentCategory::Forests,
        LandCover::Meadows | LandCover::PermeableAreas | LandCover::Hilly | LandCover::Marshes => {
            CatchmentCategory::Meadows
        }
        LandCover::Arable | LandCover::PermeableTerrainOnPlains => CatchmentCategory::Arable,
        LandCover::Mountains | LandCover::BareRockySlopes => CatchmentCategory::Mountains,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_covers_map_to_themselves() {
        for category in CatchmentCategory::ALL {
            let cover: LandCover = category.key().parse().unwrap();
            let result = classify(LandForm::FlatsAndPlateaus, cover);
            assert_eq!(result.category, category);
        }
    }

    #[test]
    fn terrain_covers_fall_back_to_nearest_category() {
        let cases = [
            (LandCover::MediumConditions, CatchmentCategory::Rural),
            (LandCover::PermeableAreas, CatchmentCategory::Meadows),
            (LandCover::PermeableTerrainOnPlains, CatchmentCategory::Arable),
            (LandCover::Hilly, CatchmentCategory::Meadows),
            (LandCover::BareRockySlopes, CatchmentCategory::Mountains),
            (LandCover::Marshes, CatchmentCategory::Meadows),
        ];
        for (cover, expected) in cases {
            assert_eq!(classify(LandForm::HigherHills, cover).category, expected);
        }
    }

    #[test]
    fn slope_grows_with_relief() {
        let slopes: Vec<f64> = LandForm::ALL
            .iter()
            .map(|form| classify(*form, LandCover::Urban).slope)
            .collect();
        assert!(slopes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn estimates_stay_within_percent_bounds() {
        for form in LandForm::ALL {
            for cover in LandCover::ALL {
                let result = classify(form, cover);
                assert!((0.0..=100.0).contains(&result.slope));
                assert!((0.0..=100.0).contains(&result.impervious));
            }
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let a = classify(LandForm::HillsWithGentleSlopes, LandCover::Suburban);
        let b = classify(LandForm::HillsWithGentleSlopes, LandCover::Suburban);
        assert_eq!(a, b);
        assert_eq!(a.impervious, 45.0);
        assert_eq!(a.slope, 7.5);
    }
}
