use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::instrument;

// The separator keeps ("ab", "c") and ("a", "bc") from hashing identically.
const SEPARATOR: &[u8] = b"$";

#[must_use]
#[instrument(level = "debug", skip(secret))]
pub fn sign_path(path: &str, secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    hasher.update(SEPARATOR);
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[must_use]
#[instrument(level = "debug", skip(secret, token))]
pub fn verify_path(path: &str, secret: &str, token: &str) -> bool {
    let expected = sign_path(path, secret);
    expected.as_bytes().ct_eq(token.as_bytes()).into()
}
