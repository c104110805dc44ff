use std::collections::{HashMap, HashSet};

/// Role-based access: users hold roles, roles grant actions.
#[derive(Debug)]
pub struct PermissionSystem {
    roles: HashMap<String, HashSet<String>>,
    user_roles: HashMap<String, HashSet<String>>,
}

impl Default for PermissionSystem {
    fn default() -> Self {
        let mut system = Self { roles: HashMap::new(), user_roles: HashMap::new() };
        system.define_role("admin", ["read", "write", "delete", "execute"]);
        system.define_role("editor", ["read", "write"]);
        system.define_role("viewer", ["read"]);
        system
    }
}

impl PermissionSystem {
    /// Starts with the `admin`, `editor` and `viewer` roles.
    pub fn new() -> Self { Self::default() }

    /// Creates or replaces a role.
    pub fn define_role<I, S>(&mut self, role: &str, actions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.insert(role.to_owned(), actions.into_iter().map(Into::into).collect());
    }

    /// Roles that are not defined grant nothing but are still recorded.
    pub fn assign_role(&mut self, user: &str, role: &str) {
        self.user_roles.entry(user.to_owned()).or_default().insert(role.to_owned());
    }

    /// Union of the actions of every role the user holds, sorted.
    pub fn permissions(&self, user: &str) -> Vec<String> {
        let Some(roles) = self.user_roles.get(user) else {
            return Vec::new();
        };
        let granted: HashSet<&String> = roles
            .iter()
            .filter_map(|role| self.roles.get(role))
            .flatten()
            .collect();
        let mut out: Vec<String> = granted.into_iter().cloned().collect();
        out.sort_unstable();
        out
    }

    pub fn can_perform(&self, user: &str, action: &str) -> bool {
        self.user_roles.get(user).is_some_and(|roles| {
            roles
                .iter()
                .filter_map(|role| self.roles.get(role))
                .any(|actions| actions.contains(action))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_union_into_permissions() {
        let mut system = PermissionSystem::new();
        system.assign_role("alice", "viewer");
        system.assign_role("alice", "editor");
        system.assign_role("bob", "admin");
        assert_eq!(system.permissions("alice"), vec!["read", "write"]);
        assert!(system.can_perform("bob", "delete"));
        assert!(!system.can_perform("alice", "delete"));
        assert!(!system.can_perform("carol", "read"));
        assert!(system.permissions("carol").is_empty());
    }

    #[test]
    fn custom_and_unknown_roles() {
        let mut system = PermissionSystem::new();
        system.define_role("auditor", ["read", "export"]);
        system.assign_role("dana", "auditor");
        system.assign_role("dana", "ghost");
        assert_eq!(system.permissions("dana"), vec!["export", "read"]);
    }
}
