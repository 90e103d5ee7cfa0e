use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "catchgen",
    about = "Subcatchment synthesis for stormwater network models",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress banner, progress and summary output (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log synthesis stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Synthesize a new subcatchment and write it into the model
    #[command(visible_alias = "a")]
    Add(AddArgs),

    /// Print one subcatchment with its subarea, infiltration and polygon
    #[command(visible_alias = "s")]
    Show(ShowArgs),

    /// Print the slope, imperviousness and category for a land class pair
    #[command(visible_alias = "c")]
    Classify(ClassifyArgs),
}

/// Land classification options shared by `add` and `classify`.
#[derive(Args)]
#[command(next_help_heading = "Land Classification")]
pub struct LandOptions {
    /// Terrain relief of the catchment
    #[arg(long = "land-form", value_name = "FORM")]
    pub land_form: LandForm,

    /// Dominant land cover of the catchment
    #[arg(long = "land-cover", value_name = "COVER")]
    pub land_cover: LandCover,
}

#[derive(Args)]
pub struct AddArgs {
    /// Model file (.inp) to extend
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Catchment area in model area units (ha or ac)
    #[arg(short, long, value_name = "AREA")]
    pub area: f64,

    #[command(flatten)]
    pub land: LandOptions,

    /// Custom subarea parameter tables (TOML)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Leave the model file untouched and print the updated model instead
    #[arg(long)]
    pub dry_run: bool,

    /// Destination for the updated model in a dry run (stdout if omitted)
    #[arg(short, long, value_name = "FILE", requires = "dry_run")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Model file (.inp) to read
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Subcatchment name
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub land: LandOptions,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LandForm {
    /// Marshes and lowlands
    #[value(alias = "marshes_and_lowlands")]
    MarshesAndLowlands,
    /// Flats and plateaus
    #[value(alias = "flats_and_plateaus")]
    FlatsAndPlateaus,
    /// Flats and plateaus in combination with hills
    #[value(alias = "flats_and_plateaus_in_combination_with_hills")]
    FlatsAndPlateausInCombinationWithHills,
    /// Hills with gentle slopes
    #[value(alias = "hills_with_gentle_slopes")]
    HillsWithGentleSlopes,
    /// Steeper hills and foothills
    #[value(alias = "steeper_hills_and_foothills")]
    SteeperHillsAndFoothills,
    /// Hills and outcrops of mountain ranges
    #[value(alias = "hills_and_outcrops_of_mountain_ranges")]
    HillsAndOutcropsOfMountainRanges,
    /// Higher hills
    #[value(alias = "higher_hills")]
    HigherHills,
    /// Mountains
    Mountains,
    /// Highest mountains
    #[value(alias = "highest_mountains")]
    HighestMountains,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LandCover {
    /// Medium conditions
    #[value(alias = "medium_conditions")]
    MediumConditions,
    /// Permeable areas
    #[value(alias = "permeable_areas")]
    PermeableAreas,
    /// Permeable terrain on plains
    #[value(alias = "permeable_terrain_on_plains")]
    PermeableTerrainOnPlains,
    /// Hilly terrain
    Hilly,
    /// Mountain terrain
    Mountains,
    /// Bare rocky slopes
    #[value(alias = "bare_rocky_slopes")]
    BareRockySlopes,
    /// Urban development
    Urban,
    /// Suburban development
    Suburban,
    /// Rural settlement
    Rural,
    /// Forests
    Forests,
    /// Meadows
    Meadows,
    /// Arable land
    Arable,
    /// Marshes
    Marshes,
}

pub fn parse() -> Cli {
    Cli::parse()
}
