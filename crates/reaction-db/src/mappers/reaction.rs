//! Reaction entity <-> model mapper

use reaction_core::entities::{NewReaction, Reaction};
use reaction_core::value_objects::{ObjectRef, ObjectType, Reactor};

use crate::models::ReactionModel;

/// Read a stored type tag
///
/// Rows are only ever written with validated tags, so a tag that fails to
/// parse is kept verbatim rather than dropped.
pub fn stored_object_type(tag: String) -> ObjectType {
    ObjectType::parse(&tag).unwrap_or(ObjectType::Other(tag))
}

/// Convert ReactionModel to Reaction entity
impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            object: ObjectRef::new(stored_object_type(model.obj_type), model.obj_id),
            reactor: Reactor::from_stored(&model.reactor),
            reaction: model.reaction,
            created_at: model.created_at,
        }
    }
}

/// Column values for inserting a new reaction
pub struct ReactionInsert<'a> {
    pub obj_type: &'a str,
    pub obj_id: i64,
    pub reactor: String,
    pub reaction: &'a str,
}

impl<'a> ReactionInsert<'a> {
    pub fn new(reaction: &'a NewReaction) -> Self {
        Self {
            obj_type: reaction.object.object_type.as_str(),
            obj_id: reaction.object.id,
            reactor: reaction.reactor.to_stored(),
            reaction: &reaction.reaction,
        }
    }
}
