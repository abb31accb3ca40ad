//! Pattern encryption capability gate

use crate::platform::{version_codes, CryptoInfo, DeviceFingerprint, EncryptionPattern};

/// Whether the platform handles the 'cbcs' scheme (AES-CBC with pattern
/// encryption).
///
/// The pattern setter exists from N, but decryption with it is broken
/// there, so N itself is excluded.
pub fn platform_supports_cbcs_encryption(device: &DeviceFingerprint) -> bool {
  device.sdk_int > version_codes::N
}

/// Set the encryption pattern on `crypto_info` when the platform has the setter
pub fn set_pattern_if_supported<C: CryptoInfo + ?Sized>(
  crypto_info: &mut C,
  encrypt_blocks: u32,
  skip_blocks: u32,
  device: &DeviceFingerprint,
) {
  if device.sdk_int >= version_codes::N {
    crypto_info.set_pattern(EncryptionPattern {
      encrypt_blocks,
      skip_blocks,
    });
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::version_codes::*;
  use crate::testing::{FakeCryptoInfo, FakePlatform};

  #[test]
  fn test_cbcs_requires_post_n() {
    assert!(!platform_supports_cbcs_encryption(&FakePlatform::fingerprint_at(M)));
    assert!(!platform_supports_cbcs_encryption(&FakePlatform::fingerprint_at(N)));
    assert!(platform_supports_cbcs_encryption(&FakePlatform::fingerprint_at(N + 1)));
  }

  #[test]
  fn test_pattern_not_set_before_n() {
    let mut crypto = FakeCryptoInfo::default();
    set_pattern_if_supported(&mut crypto, 1, 9, &FakePlatform::fingerprint_at(M));
    assert_eq!(crypto.pattern, None);
  }

  #[test]
  fn test_pattern_set_from_n() {
    let mut crypto = FakeCryptoInfo::default();
    set_pattern_if_supported(&mut crypto, 1, 9, &FakePlatform::fingerprint_at(N));
    assert_eq!(
      crypto.pattern,
      Some(EncryptionPattern {
        encrypt_blocks: 1,
        skip_blocks: 9
      })
    );
  }
}
