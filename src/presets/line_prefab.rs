use crate::blueprint::{Blueprint, BlueprintFactory};
use crate::config::LiftupConfig;
use crate::error::Result;
use crate::math::Vector3;

pub(super) fn generate(factory: &mut BlueprintFactory, config: &LiftupConfig) -> Result<Vec<Blueprint>> {
    config
        .segment_line(1, Vector3::zeros(), Vector3::new(10.0, 10.0, 0.0))
        .execute(factory)
}
