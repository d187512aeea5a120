use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::CryptoError;

/// Hex-encoded HMAC-SHA256 signature, as sent in `X-Hook-Signature`.
pub struct Signature<'a>(pub &'a str);

impl<'a> Signature<'a> {
    /// Compute the hex signature of a body.
    pub fn compute(body: &[u8], secret: &str) -> Result<String, CryptoError> {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;
        hmac.update(body);
        Ok(hex::encode(hmac.finalize().into_bytes()))
    }

    /// Check if a signature is valid.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool, CryptoError> {
        let decoded_signature =
            &hex::decode(self.0).map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: self.0.to_string(),
            })?;
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;

        hmac.update(body);
        Ok(hmac.verify_slice(decoded_signature).is_ok())
    }
}
