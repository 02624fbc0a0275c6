use serde::{Deserialize, Serialize};

/// A named permission group, e.g. `ROLE_ADMIN`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    /// Assigned by the store on insert; `None` while transient.
    pub id: Option<i64>,
    /// Unique business key. Not written on merge.
    pub name: String,
    pub description: Option<String>,
    /// Optimistic lock counter, bumped by the store on every merge.
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleState {
    /// Constructed in memory, never written.
    Transient,
    /// Carries a store identity. Once removed, the id is no longer findable.
    Persisted,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            version: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn state(&self) -> RoleState {
        if self.is_new() {
            RoleState::Transient
        } else {
            RoleState::Persisted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_role_is_transient() {
        let role = Role::new("ROLE_ADMIN").with_description("Administrators");

        assert!(role.is_new());
        assert_eq!(role.state(), RoleState::Transient);
        assert_eq!(role.description.as_deref(), Some("Administrators"));
        assert_eq!(role.version, 0);
    }

    #[test]
    fn test_role_with_id_is_persisted() {
        let role = Role {
            id: Some(7),
            ..Role::new("ROLE_USER")
        };

        assert!(!role.is_new());
        assert_eq!(role.state(), RoleState::Persisted);
    }

    #[test]
    fn test_deserialize_transient_role() {
        let role: Role =
            serde_json::from_str(r#"{"id":null,"name":"ROLE_USER","description":null}"#)
                .expect("valid role json");

        assert!(role.is_new());
        assert_eq!(role.version, 0);
        assert!(role.created_at.is_none());
    }
}
