//! Index cleaner job defaults

use super::DEFAULT_DAILY_SCHEDULE;
use crate::config::{ImageComponent, OperatorConfig};
use crate::crd::{JaegerStorageSpec, TriState};
use crate::storage::ELASTICSEARCH;
use tracing::{debug, info};

/// Days of indices kept when the user did not choose
pub const DEFAULT_NUMBER_OF_DAYS: i32 = 7;

/// Apply defaults to the index cleaner job
pub fn normalize_index_cleaner(spec: &mut JaegerStorageSpec, config: &OperatorConfig) {
    let cleaner = &mut spec.es_index_cleaner;

    // exact match: a differently cased backend name keeps the job untouched
    if spec.storage_type == ELASTICSEARCH && cleaner.enabled.is_unset() {
        info!("Enabling the index cleaner job");
        cleaner.enabled = TriState::Enabled;
    }

    if cleaner.image.is_empty() {
        debug!(image = %config.es_index_cleaner_image, "Index cleaner image not provided. Using default");
    }
    cleaner.image = config.image_name(&cleaner.image, ImageComponent::EsIndexCleaner);

    if cleaner.schedule.is_empty() {
        debug!(schedule = DEFAULT_DAILY_SCHEDULE, "Index cleaner schedule not provided. Using default");
        cleaner.schedule = DEFAULT_DAILY_SCHEDULE.to_string();
    }

    if cleaner.number_of_days.is_none() {
        debug!(days = DEFAULT_NUMBER_OF_DAYS, "Index cleaner retention not provided. Using default");
        cleaner.number_of_days = Some(DEFAULT_NUMBER_OF_DAYS);
    }
}
