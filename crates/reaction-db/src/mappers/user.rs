//! User entity <-> model mapper

use reaction_core::entities::User;
use reaction_core::value_objects::UserId;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            display_name: model.display_name,
        }
    }
}
