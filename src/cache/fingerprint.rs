//! Content fingerprints used as strong ETags.

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use sha2::{Digest, Sha256};

/// Compute a strong, quoted ETag for `content`: `"<len hex>-<base64 sha256 prefix>"`.
pub fn fingerprint(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!(
        "\"{:x}-{}\"",
        content.len(),
        STANDARD_NO_PAD.encode(&digest[..20])
    )
}
