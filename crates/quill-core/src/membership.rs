//! Organization membership checks.

use crate::domain::Organization;

/// Whether `org` is one of the organizations the current user administers.
///
/// An unknown organization is never administered.
pub fn is_organization_admin(
    member_organizations: &[Organization],
    org: Option<&Organization>,
) -> bool {
    org.is_some_and(|org| member_organizations.iter().any(|o| o.id == org.id))
}
