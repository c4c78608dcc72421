/// Credential check, isolated here so a hashing scheme can replace the
/// comparison without touching the login handler.
///
/// Stored passwords are plaintext, inherited from the legacy deployment;
/// the comparison is exact (case-sensitive, no trimming).
pub fn verify_credential(provided: &str, stored: &str) -> bool {
    provided == stored
}
