use sha2::{Digest, Sha256};

use crate::error::{CatalogueError, Result};

pub const MIN_PASSWORD_LEN: usize = 8;

type Digest32 = [u8; 32];

/// Holds only the SHA-256 digest of the password.
#[derive(Debug, Clone)]
pub struct User {
    username: String,
    password: Digest32,
}

fn hash_password(password: &str) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

fn check_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CatalogueError::WeakPassword { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

impl User {
    pub fn new(username: impl Into<String>, password: &str) -> Result<Self> {
        check_strength(password)?;
        Ok(Self { username: username.into(), password: hash_password(password) })
    }

    pub fn username(&self) -> &str { &self.username }

    pub fn verify_password(&self, password: &str) -> bool {
        hash_password(password) == self.password
    }

    /// The old password must match and the new one must pass the length check.
    pub fn change_password(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.verify_password(old) {
            return Err(CatalogueError::IncorrectPassword);
        }
        check_strength(new)?;
        self.password = hash_password(new);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_rejected() {
        assert_eq!(User::new("alice", "short").unwrap_err(), CatalogueError::WeakPassword { min: 8 });
    }

    #[test]
    fn verify_and_change() {
        let mut user = User::new("alice", "secret123").unwrap();
        assert!(user.verify_password("secret123"));
        assert!(!user.verify_password("secret124"));
        assert_eq!(user.change_password("wrong", "newpass123"), Err(CatalogueError::IncorrectPassword));
        assert!(user.change_password("secret123", "tiny").is_err());
        assert!(user.verify_password("secret123"));
        user.change_password("secret123", "newpass123").unwrap();
        assert!(user.verify_password("newpass123"));
        assert!(!user.verify_password("secret123"));
    }
}
