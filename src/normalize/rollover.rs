//! Index rollover job defaults

use crate::config::{ImageComponent, OperatorConfig};
use crate::crd::JaegerEsRolloverSpec;
use tracing::debug;

/// Every 30 minutes
pub const DEFAULT_ROLLOVER_SCHEDULE: &str = "*/30 * * * *";

pub fn normalize_rollover(spec: &mut JaegerEsRolloverSpec, config: &OperatorConfig) {
    if spec.image.is_empty() {
        debug!(image = %config.es_rollover_image, "Rollover image not provided. Using default");
    }
    spec.image = config.image_name(&spec.image, ImageComponent::EsRollover);
    if spec.schedule.is_empty() {
        debug!(schedule = DEFAULT_ROLLOVER_SCHEDULE, "Rollover schedule not provided. Using default");
        spec.schedule = DEFAULT_ROLLOVER_SCHEDULE.to_string();
    }
}
