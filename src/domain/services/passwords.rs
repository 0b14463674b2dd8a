use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;

use crate::error::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::InternalWithMsg(format!("password hashing failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn test_hash_verifies_only_original_password() {
        let hash = hash_password("password123").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(Argon2::default().verify_password(b"password123", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"password124", &parsed).is_err());
    }
}
