//! Edit-permission predicate.
//!
//! A document's access level is the minimum role required to *edit* it; any
//! role may view.  The predicate is pure and recomputed on every call, never
//! cached or denormalised onto the document.

use crate::types::UserRole;

/// Whether a user holding `role` may edit a document gated at `access_level`.
pub fn can_edit(role: UserRole, access_level: UserRole) -> bool {
    match role {
        UserRole::Admin => true,
        UserRole::Editor => access_level != UserRole::Admin,
        UserRole::Viewer => false,
    }
}
