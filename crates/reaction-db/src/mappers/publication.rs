//! Ranked publication mapper

use reaction_core::entities::{Publication, ReactedPublication};

use super::stored_object_type;
use crate::models::ReactedPublicationModel;

/// Build a ranked publication, labelling it with the filter that produced it
pub fn reacted_publication(model: ReactedPublicationModel, label: &str) -> ReactedPublication {
    ReactedPublication {
        publication: Publication {
            id: model.id,
            post_type: stored_object_type(model.post_type),
            title: model.post_title,
            status: model.post_status,
            published_at: model.post_date,
        },
        reaction_type: label.to_string(),
        reaction_count: model.reaction_count,
    }
}
