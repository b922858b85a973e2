//! Basic-Auth credential encoding.
//!
//! The credential is the standard Base64 encoding of `name:password`,
//! computed once at client construction and reused for every request on
//! that client. The encoding buffer is fixed-size; inputs that do not fit
//! are rejected up front instead of being silently truncated.

use base64ct::{Base64, Encoding};
use heapless::{String, Vec};

use crate::error::Error;

/// Longest supported `name:password` input in bytes.
pub(crate) const MAX_CREDENTIAL_INPUT: usize = 48;

/// Encoded output capacity: four output characters per three input bytes.
pub(crate) const MAX_CREDENTIAL_LEN: usize = 64;

/// A precomputed `Authorization: Basic` header value.
pub(crate) type Credential = String<MAX_CREDENTIAL_LEN>;

/// Encode `name:password` as a Basic-Auth credential.
///
/// Returns [`Error::CredentialTooLong`] when the joined input exceeds
/// [`MAX_CREDENTIAL_INPUT`] bytes.
pub(crate) fn basic_credential(name: &str, password: &str) -> Result<Credential, Error> {
    let mut raw: Vec<u8, MAX_CREDENTIAL_INPUT> = Vec::new();
    raw.extend_from_slice(name.as_bytes())
        .map_err(|_| Error::CredentialTooLong)?;
    raw.push(b':').map_err(|_| Error::CredentialTooLong)?;
    raw.extend_from_slice(password.as_bytes())
        .map_err(|_| Error::CredentialTooLong)?;

    let mut encoded = [0u8; MAX_CREDENTIAL_LEN];
    let value = Base64::encode(&raw, &mut encoded).map_err(|_| Error::CredentialTooLong)?;
    Credential::try_from(value).map_err(|_| Error::CredentialTooLong)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_name_and_password() {
        assert_eq!(basic_credential("user", "pass").unwrap(), "dXNlcjpwYXNz");
    }

    #[test]
    fn encodes_empty_password() {
        // "user:" with a zero-padded final group
        assert_eq!(basic_credential("user", "").unwrap(), "dXNlcjo=");
    }

    #[test]
    fn accepts_input_at_the_limit() {
        // 23 + 1 + 24 = 48 bytes, encodes to exactly 64 characters
        let name = "aaaaaaaaaaaaaaaaaaaaaaa";
        let password = "bbbbbbbbbbbbbbbbbbbbbbbb";
        let credential = basic_credential(name, password).unwrap();
        assert_eq!(credential.len(), 64);
    }

    #[test]
    fn rejects_input_past_the_limit() {
        let name = "aaaaaaaaaaaaaaaaaaaaaaaa";
        let password = "bbbbbbbbbbbbbbbbbbbbbbbb";
        assert_eq!(
            basic_credential(name, password),
            Err(Error::CredentialTooLong)
        );
    }
}
