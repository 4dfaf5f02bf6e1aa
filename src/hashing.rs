// 🔒 Password hashing - illustrative only, no cryptographic claims

use rand::Rng;
use sha2::{Digest, Sha512};

/// Salt length in bytes (hex-encoded to 32 chars)
pub const SALT_BYTES: usize = 16;

/// Unsalted SHA-512 of the hint, lowercase hex
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// SHA-512 over `password + salt`
pub fn hash_password_with_salt(password: &str, salt: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn generate_salt<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rng.fill(&mut bytes[..]);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hash_password_known_vector() {
        // sha512("abc")
        assert_eq!(
            hash_password("abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_salted_hash_is_hash_of_concatenation() {
        let salted = hash_password_with_salt("Alice90", "deadbeef");
        assert_eq!(salted, hash_password("Alice90deadbeef"));
        assert_ne!(salted, hash_password("Alice90"));
    }

    #[test]
    fn test_generate_salt_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let salt = generate_salt(&mut rng);
        assert_eq!(salt.len(), SALT_BYTES * 2);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(salt, generate_salt(&mut rng));
    }
}
