//! Ready-made track generators.
//!
//! Each preset appends its objects and one spawn point to a fresh track and
//! hides the template's default spawn point.

mod grid;
mod line_prefab;
mod loop_trainer;
mod mesh;
mod orientation_survey;
mod random_scatter;
mod rotations;

use std::fmt;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::config::LiftupConfig;
use crate::error::Result;
use crate::math::Vector3;
use crate::track::{make_track, save_track, TrackDocument};

/// A numbered track generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    RandomCylinders,
    Grid,
    RandomItems,
    LoopTrainer,
    Mesh,
    OrientationSurvey,
    LinePrefab,
    Rotations,
}

impl Preset {
    /// Every preset in number order.
    pub const ALL: [Self; 8] = [
        Self::RandomCylinders,
        Self::Grid,
        Self::RandomItems,
        Self::LoopTrainer,
        Self::Mesh,
        Self::OrientationSurvey,
        Self::LinePrefab,
        Self::Rotations,
    ];

    /// Returns the number the preset is run by.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::RandomCylinders => 1,
            Self::Grid => 2,
            Self::RandomItems => 3,
            Self::LoopTrainer => 4,
            Self::Mesh => 5,
            Self::OrientationSurvey => 6,
            Self::LinePrefab => 7,
            Self::Rotations => 9,
        }
    }

    /// Looks a preset up by its number.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.number() == number)
    }

    /// Returns the name of the generated track.
    #[must_use]
    pub fn track_name(self) -> &'static str {
        match self {
            Self::RandomCylinders => "randomcyl",
            Self::Grid => "grid",
            Self::RandomItems => "randitems",
            Self::LoopTrainer => "looptrainer",
            Self::Mesh => "mesh",
            Self::OrientationSurvey => "rotationsurvey",
            Self::LinePrefab => "lineprefab",
            Self::Rotations => "rotations",
        }
    }

    /// Returns a one-line description.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::RandomCylinders => "randomly placed and rotated 5m cylinders above ground",
            Self::Grid => "a 20x20x20 lattice of 1m cubes",
            Self::RandomItems => "random primitives scattered above ground",
            Self::LoopTrainer => "twenty widening loops built from light hoops",
            Self::Mesh => "a 10x10x10 mesh of axis-aligned cylinders",
            Self::OrientationSurvey => "cylinders rotated in quarter turns about Z",
            Self::LinePrefab => "a single diagonal segment line",
            Self::Rotations => "segment lines fanned out over a sphere",
        }
    }

    fn spawn_position(self) -> Vector3 {
        match self {
            Self::RandomCylinders | Self::Grid | Self::RandomItems | Self::Mesh => {
                Vector3::new(0.0, 0.0, -100.0)
            }
            Self::LoopTrainer => Vector3::new(0.0, 0.1, -30.0),
            Self::OrientationSurvey | Self::LinePrefab | Self::Rotations => {
                Vector3::new(0.0, 1.0, -20.0)
            }
        }
    }

    /// Generates the preset's objects, spawn point excluded.
    ///
    /// # Errors
    ///
    /// Returns an error if a segment line cannot be built.
    pub fn generate(
        self,
        factory: &mut BlueprintFactory,
        config: &LiftupConfig,
        rng: &mut StdRng,
    ) -> Result<Vec<Blueprint>> {
        match self {
            Self::RandomCylinders => Ok(random_scatter::cylinders(factory, rng)),
            Self::Grid => Ok(grid::generate(factory)),
            Self::RandomItems => Ok(random_scatter::items(factory, rng)),
            Self::LoopTrainer => Ok(loop_trainer::generate(factory)),
            Self::Mesh => Ok(mesh::generate(factory)),
            Self::OrientationSurvey => Ok(orientation_survey::generate(factory)),
            Self::LinePrefab => line_prefab::generate(factory, config),
            Self::Rotations => rotations::generate(factory, config),
        }
    }

    /// Fills `track` with the preset's objects and its spawn point.
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the track has no `Track` node.
    pub fn apply(
        self,
        track: &mut TrackDocument,
        factory: &mut BlueprintFactory,
        config: &LiftupConfig,
        rng: &mut StdRng,
    ) -> Result<()> {
        let items = self.generate(factory, config, rng)?;
        track.extend(items);
        track.push(factory.make_spawn_point(self.spawn_position(), Vector3::zeros(), None));
        track.set_track_field("hideDefaultSpawnpoint", true)?;
        Ok(())
    }

    /// Builds and saves the preset's track, returning the written path.
    ///
    /// A `seed` makes random presets repeatable.
    ///
    /// # Errors
    ///
    /// Returns an error if the template cannot be loaded, generation fails
    /// or the track cannot be saved.
    pub fn run(self, config: &LiftupConfig, seed: Option<u64>) -> Result<PathBuf> {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut factory = BlueprintFactory::new();
        let mut track = make_track(self.track_name(), config, &mut factory)?;
        self.apply(&mut track, &mut factory, config, &mut rng)?;
        info!(preset = self.number(), track = self.track_name(), instances = track.instances().len(), "generated preset");
        save_track(track, config)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02} {}", self.number(), self.track_name())
    }
}
