//! Value objects - immutable domain primitives

mod object_type;
mod reactor;
mod settings;
mod user_id;

pub use object_type::{ObjectRef, ObjectType, ObjectTypeError, MAX_TYPE_LEN};
pub use reactor::{Reactor, MAX_REACTOR_LEN};
pub use settings::{keys, sanitize_icon_set, Position, ReactionSettings, SettingsError};
pub use user_id::{UserId, UserIdParseError};
