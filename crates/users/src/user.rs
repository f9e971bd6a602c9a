use serde::Serialize;

use catalogo_core::{DomainError, DomainResult, Entity, UserId};

/// Availability shown next to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UserStatus {
    #[serde(rename = "Disponível")]
    Disponivel,
    #[serde(rename = "Ocupado")]
    Ocupado,
    #[serde(rename = "Ausente")]
    Ausente,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Disponivel => "Disponível",
            UserStatus::Ocupado => "Ocupado",
            UserStatus::Ausente => "Ausente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub status: UserStatus,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, status: UserStatus) -> Self {
        Self {
            id: UserId::new(id),
            name: name.into(),
            status,
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Immutable user list, built once at startup.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The three demo users every process starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            User::new(1, "Alice", UserStatus::Disponivel),
            User::new(2, "Bob", UserStatus::Ocupado),
            User::new(3, "Charlie", UserStatus::Ausente),
        ])
    }

    /// All users, or only those whose status label equals `status` exactly.
    pub fn list(&self, status: Option<&str>) -> Vec<User> {
        match status {
            Some(status) => self
                .users
                .iter()
                .filter(|u| u.status.as_str() == status)
                .cloned()
                .collect(),
            None => self.users.clone(),
        }
    }

    pub fn get(&self, id: UserId) -> DomainResult<User> {
        self.users
            .iter()
            .find(|u| u.id() == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }
}
