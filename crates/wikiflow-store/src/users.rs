//! User directory and the persisted current-user pointer.
//!
//! There is no real authentication; the directory is a fixed set of demo
//! personas and "logging in" just moves a pointer.  The directory is
//! injectable so a real identity provider can replace it without touching
//! permission logic.

use wikiflow_shared::types::UserRole;

use crate::database::{Store, KEY_CURRENT_USER};
use crate::error::Result;
use crate::models::User;

/// A fixed, ordered set of selectable personas.
///
/// The list must be non-empty; the first entry is the default persona.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        debug_assert!(!users.is_empty(), "directory needs at least one persona");
        Self { users }
    }

    /// The builtin demo personas, one per role.
    pub fn builtin() -> Self {
        Self::new(vec![
            User {
                id: "u1".into(),
                name: "Olivia Chen".into(),
                email: "admin@company.com".into(),
                role: UserRole::Admin,
                avatar_url: "https://ui-avatars.com/api/?name=Olivia+Chen&background=6366f1&color=fff".into(),
            },
            User {
                id: "u2".into(),
                name: "Marcus Lee".into(),
                email: "editor@company.com".into(),
                role: UserRole::Editor,
                avatar_url: "https://ui-avatars.com/api/?name=Marcus+Lee&background=10b981&color=fff".into(),
            },
            User {
                id: "u3".into(),
                name: "Priya Patel".into(),
                email: "viewer@company.com".into(),
                role: UserRole::Viewer,
                avatar_url: "https://ui-avatars.com/api/?name=Priya+Patel&background=64748b&color=fff".into(),
            },
        ])
    }

    /// All personas, in configured order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Look up a persona by id.
    pub fn find(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The persona used when no current user is stored.
    pub fn default_user(&self) -> &User {
        &self.users[0]
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Store {
    /// Return the persisted current user, defaulting to the directory's
    /// first persona when none is stored.
    pub fn current_user(&self, directory: &UserDirectory) -> Result<User> {
        match self.load::<User>(KEY_CURRENT_USER)? {
            Some(user) => Ok(user),
            None => Ok(directory.default_user().clone()),
        }
    }

    /// Point the current-user pointer at `id`, persist it and return it.
    ///
    /// Unknown ids fall back to the default persona.
    pub fn switch_user(&self, directory: &UserDirectory, id: &str) -> Result<User> {
        let user = directory
            .find(id)
            .unwrap_or_else(|| directory.default_user())
            .clone();

        self.save(KEY_CURRENT_USER, &user)?;
        tracing::info!(user_id = %user.id, role = %user.role, "switched current user");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open_at(&dir.path().join("test.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn defaults_to_first_persona() {
        let (_dir, store) = open_store();
        let directory = UserDirectory::builtin();

        let user = store.current_user(&directory).unwrap();
        assert_eq!(&user, directory.default_user());
    }

    #[test]
    fn switch_persists_across_reads() {
        let (_dir, store) = open_store();
        let directory = UserDirectory::builtin();

        let switched = store.switch_user(&directory, "u3").unwrap();
        assert_eq!(switched.role, UserRole::Viewer);

        let current = store.current_user(&directory).unwrap();
        assert_eq!(current.id, "u3");
    }

    #[test]
    fn unknown_id_falls_back_to_default() {
        let (_dir, store) = open_store();
        let directory = UserDirectory::builtin();

        let user = store.switch_user(&directory, "nobody").unwrap();
        assert_eq!(&user, directory.default_user());
        assert_eq!(store.current_user(&directory).unwrap().id, "u1");
    }
}
