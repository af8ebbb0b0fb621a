//! Users, the branches they belong to and their roles.

use serde::{Deserialize, Serialize};

use crate::grid::{CellValue, Record};

/// Organizational sub-unit that scopes the active session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub name: String,
}

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Named permission grouping. Not enforced by the console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub code: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Login responses may omit it.
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl User {
    /// Branch with id `branch_id`, if the user belongs to it.
    pub fn find_branch(&self, branch_id: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == branch_id)
    }

    /// Uppercased first character of the name, shown when there is no avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.name.clone()).collect()
    }

    pub fn branch_names(&self) -> Vec<String> {
        self.branches.iter().map(|b| b.name.clone()).collect()
    }
}

impl Record for User {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => (&self.id).into(),
            "name" => (&self.name).into(),
            "email" => (&self.email).into(),
            "username" => (&self.username).into(),
            "avatar" => self.avatar.clone().into(),
            "branches" => self.branch_names().into(),
            "roles" => self.role_names().into(),
            _ => CellValue::Empty,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        ["id", "name", "email", "username", "avatar", "branches", "roles"]
            .iter()
            .map(|key| self.value(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            name: "john Doe".to_string(),
            email: "john@example.com".to_string(),
            username: "johndoe".to_string(),
            avatar: None,
            branches: vec![Branch::new("1", "Main Branch"), Branch::new("2", "North")],
            roles: vec![Role {
                id: "1".to_string(),
                code: "ADMIN".to_string(),
                name: "Administrator".to_string(),
            }],
        }
    }

    #[test]
    fn test_find_branch() {
        let u = user();
        assert_eq!(u.find_branch("2").map(|b| b.name.as_str()), Some("North"));
        assert!(u.find_branch("9").is_none());
    }

    #[test]
    fn test_initial() {
        assert_eq!(user().initial(), "J");
        let mut nameless = user();
        nameless.name.clear();
        assert_eq!(nameless.initial(), "");
    }

    #[test]
    fn test_nested_records_stringify_as_names() {
        let u = user();
        assert_eq!(u.value("roles").join(", "), "Administrator");
        assert_eq!(u.value("branches").to_string(), "Main Branch,North");
        assert!(u.value("avatar").is_empty());
    }

    #[test]
    fn test_deserialize_login_shape() {
        let json = r#"{
            "id": "7",
            "name": "Ana",
            "email": "ana@corp.ec",
            "branches": [{"id": "3", "name": "Sur"}]
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.username, "");
        assert_eq!(u.branches, vec![Branch::new("3", "Sur")]);
        assert!(u.roles.is_empty());
    }
}
