//! Question Catalog — the static role list and per-role question sets.
//!
//! `AppState` holds an `Arc<dyn Catalog>` built once at startup and only read
//! afterwards, so handlers and tests can swap in a different provider.

pub mod handlers;
pub mod questions;
pub mod roles;

pub use roles::Role;

/// Read-only provider of roles and question sets.
pub trait Catalog: Send + Sync {
    /// All roles in display order.
    fn roles(&self) -> &[Role];

    /// Ordered question set for `role_id`. Never fails: unknown ids fall back
    /// to the common prompts.
    fn questions(&self, role_id: &str) -> Vec<String>;

    fn find_role(&self, role_id: &str) -> Option<&Role> {
        self.roles().iter().find(|r| r.id == role_id)
    }

    /// Display title for a role, derived from the id when it is not listed.
    fn role_title(&self, role_id: &str) -> String {
        roles::title_for(self.roles(), role_id)
    }
}

/// The built-in catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    roles: Vec<Role>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            roles: roles::default_roles(),
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for StaticCatalog {
    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn questions(&self, role_id: &str) -> Vec<String> {
        questions::question_set(role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_role() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.find_role("ui-ux-designer").unwrap().questions, 10);
        assert!(catalog.find_role("astronaut").is_none());
    }

    #[test]
    fn test_role_title_prefers_catalog() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.role_title("ui-ux-designer"), "UI/UX Designer");
        assert_eq!(catalog.role_title("data-scientist"), "Data Scientist");
    }

    #[test]
    fn test_questions_go_through_question_set() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.questions("sales-representative").len(), 8);
        assert_eq!(catalog.questions("").len(), 5);
    }
}
