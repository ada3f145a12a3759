//! User profile card state.
//!
//! Loads `GET /api/users?email=` once and keeps the first match. "Update"
//! never reaches the server; it only sets a confirmation message.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::types::User;

pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated (simulate API call)";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileLoad {
    #[default]
    Loading,
    NotFound,
    /// First matching user. `name` is editable in the form.
    Loaded { name: String, email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub load: ProfileLoad,
    pub update_message: String,
}

impl ProfileState {
    /// Resolve the user lookup. A failed request leaves the card loading.
    pub fn resolve(&mut self, result: Result<Vec<User>, String>) {
        let Ok(users) = result else {
            return;
        };
        self.load = match users.into_iter().next() {
            Some(user) => ProfileLoad::Loaded { name: user.name, email: user.email },
            None => ProfileLoad::NotFound,
        };
    }

    pub fn set_name(&mut self, value: String) {
        if let ProfileLoad::Loaded { name, .. } = &mut self.load {
            *name = value;
        }
    }

    pub fn submit_update(&mut self) {
        PROFILE_UPDATED_MESSAGE.clone_into(&mut self.update_message);
    }
}
