//! OVH request signing
//!
//! Every authenticated call carries an `X-Ovh-Signature` header computed as
//! `"$1$" + sha1_hex(app_secret + "+" + consumer_key + "+" + method + "+" +
//! url + "+" + body + "+" + timestamp)`. The scheme (and the SHA-1 choice)
//! is fixed by the OVH API.

use sha1::{Digest, Sha1};

/// Compute the `X-Ovh-Signature` value for one request
pub fn sign_request(
    app_secret: &str,
    consumer_key: &str,
    method: &str,
    url: &str,
    body: &str,
    timestamp: i64,
) -> String {
    let mut hasher = Sha1::new();
    hasher.update(app_secret.as_bytes());
    hasher.update(b"+");
    hasher.update(consumer_key.as_bytes());
    hasher.update(b"+");
    hasher.update(method.as_bytes());
    hasher.update(b"+");
    hasher.update(url.as_bytes());
    hasher.update(b"+");
    hasher.update(body.as_bytes());
    hasher.update(b"+");
    hasher.update(timestamp.to_string().as_bytes());

    format!("$1${}", hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_has_ovh_format() {
        let sig = sign_request(
            "app-secret",
            "consumer-key",
            "GET",
            "https://eu.api.ovh.com/1.0/domain/zone/example.com/record?fieldType=A",
            "",
            1366560945,
        );

        assert!(sig.starts_with("$1$"));
        let digest = &sig[3..];
        assert_eq!(digest.len(), 40);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn signature_is_deterministic() {
        let a = sign_request("s", "c", "GET", "https://x/1.0/y", "", 1);
        let b = sign_request("s", "c", "GET", "https://x/1.0/y", "", 1);
        assert_eq!(a, b);
    }

    #[test]
    fn signature_covers_body_and_timestamp() {
        let base = sign_request("s", "c", "POST", "https://x/1.0/y", "{}", 1);
        assert_ne!(base, sign_request("s", "c", "POST", "https://x/1.0/y", "[]", 1));
        assert_ne!(base, sign_request("s", "c", "POST", "https://x/1.0/y", "{}", 2));
        assert_ne!(base, sign_request("s", "c", "GET", "https://x/1.0/y", "{}", 1));
    }
}
