// ============================
// gatekey-backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.

/// bcrypt work factor used for all new hashes
pub const HASH_COST: u32 = bcrypt::DEFAULT_COST; // 12

/// Hash a password using bcrypt with a fresh random salt
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let hash = bcrypt::hash(plain, HASH_COST)?;
    Ok(hash)
}

/// Verify a password against a hash.
///
/// Returns false for a wrong password or an unparseable hash; a wrong
/// password is never an error.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("correct horse battery").unwrap();
        assert!(verify_password(&hash, "correct horse battery"));
        assert!(!verify_password(&hash, "wrong password"));
    }

    #[test]
    fn hash_never_contains_plaintext() {
        let hash = hash_password("hunter2!").unwrap();
        assert_ne!(hash, "hunter2!");
        assert!(!hash.contains("hunter2!"));
    }

    #[test]
    fn salt_varies_per_call() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
        assert!(verify_password(&first, "same password"));
        assert!(verify_password(&second, "same password"));
    }

    #[test]
    fn garbage_hash_verifies_false() {
        assert!(!verify_password("not a bcrypt hash", "anything"));
        assert!(!verify_password("", "anything"));
    }
}
