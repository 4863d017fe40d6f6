/// Credential utilities
///
/// - [`password`]: Argon2id password hashing and verification
///
/// There is no login, session, or token handling; stored hashes are only
/// ever written, never checked by the API itself.

pub mod password;
