//! Device quirk policy
//!
//! Allow/deny decisions for codecs that are registered but known to
//! misbehave on particular devices or platform versions. Every check is a
//! pure function of the mime type and an explicit [`DeviceFingerprint`].

use crate::platform::{version_codes, DeviceFingerprint};

use super::mime_types;

const SAMSUNG: &str = "samsung";

/// Hardware name prefix of MediaTek boards
const MEDIATEK_HARDWARE_PREFIX: &str = "mt";

/// A model prefix denied on devices of one manufacturer
struct ModelDenial {
  prefix: &'static str,
  /// Deny only below this API level; `None` denies on every version
  below_sdk: Option<u32>,
}

impl ModelDenial {
  fn matches(&self, device: &DeviceFingerprint) -> bool {
    let version_matches = match self.below_sdk {
      Some(sdk) => device.sdk_int < sdk,
      None => true,
    };
    version_matches && device.model.starts_with(self.prefix)
  }
}

/// Samsung models that cannot render VP8 to a surface or break WebRTC
const SAMSUNG_VP8_DENIED_MODELS: &[ModelDenial] = &[
  // Galaxy S4
  ModelDenial { prefix: "GT-I9505", below_sdk: Some(version_codes::LOLLIPOP) },
  ModelDenial { prefix: "GT-I9500", below_sdk: Some(version_codes::LOLLIPOP) },
  // Galaxy S4 Mini
  ModelDenial { prefix: "GT-I9190", below_sdk: None },
  ModelDenial { prefix: "GT-I9195", below_sdk: None },
  // Galaxy Note 2, Galaxy S4 (CDMA) and Galaxy Tab families
  ModelDenial { prefix: "GT-", below_sdk: Some(version_codes::KITKAT) },
  ModelDenial { prefix: "SCH-", below_sdk: Some(version_codes::KITKAT) },
  ModelDenial { prefix: "SM-T", below_sdk: Some(version_codes::KITKAT) },
];

/// Samsung Galaxy S3 variants returning corrupt frames with adaptive playback
const ADAPTIVE_PLAYBACK_DENIED_MODELS: &[&str] = &["GT-I9300", "SCH-I535"];

/// The only release on which the adaptive playback denial applies
const ADAPTIVE_PLAYBACK_DENIED_RELEASE: &str = "4.4.2";

/// Devices whose HW H.264 encoder misses the target bitrate badly
pub const H264_ENCODER_MODEL_BLACKLIST: &[&str] = &["SAMSUNG-SGH-I337", "Nexus 7", "Nexus 4"];

fn is_mediatek(device: &DeviceFingerprint) -> bool {
  device.hardware.starts_with(MEDIATEK_HARDWARE_PREFIX)
}

/// Whether decoding `mime` is allowed on `device`.
///
/// Mime types without an entry are always allowed.
pub fn is_decoder_supported_for_device(mime: &str, device: &DeviceFingerprint) -> bool {
  match mime {
    mime_types::VIDEO_VP8 => is_vp8_decoder_allowed(device),
    mime_types::VIDEO_VP9 => is_vp9_decoder_allowed(device),
    mime_types::AUDIO_OPUS => device.sdk_int >= version_codes::LOLLIPOP,
    _ => true,
  }
}

fn is_vp8_decoder_allowed(device: &DeviceFingerprint) -> bool {
  // VP8 must be fully drained before release, which cannot be done while
  // the surface is torn down synchronously on older releases.
  if device.sdk_int < version_codes::JELLY_BEAN_MR2 {
    return false;
  }

  if device.is_manufacturer(SAMSUNG)
    && SAMSUNG_VP8_DENIED_MODELS
      .iter()
      .any(|denial| denial.matches(device))
  {
    return false;
  }

  !is_mediatek(device)
}

fn is_vp9_decoder_allowed(device: &DeviceFingerprint) -> bool {
  if device.sdk_int < version_codes::KITKAT {
    return false;
  }

  !(device.sdk_int < version_codes::LOLLIPOP && is_mediatek(device))
}

/// Whether adaptive playback may be enabled for `mime` on `device`.
///
/// Denied only for one exact mime/release/manufacturer/model combination.
pub fn is_adaptive_playback_allowed(mime: &str, device: &DeviceFingerprint) -> bool {
  if mime != mime_types::VIDEO_H264 && mime != mime_types::VIDEO_H264_AVC1 {
    return true;
  }

  if device.release != ADAPTIVE_PLAYBACK_DENIED_RELEASE {
    return true;
  }

  if !device.is_manufacturer(SAMSUNG) {
    return true;
  }

  !ADAPTIVE_PLAYBACK_DENIED_MODELS
    .iter()
    .any(|prefix| device.model.starts_with(prefix))
}

/// Device-level part of encoder eligibility.
///
/// Does not look at the codec list; see
/// [`super::encoder::is_encoder_supported_by_device`] for the full check.
pub fn is_encoder_allowed_for_device(mime: &str, device: &DeviceFingerprint) -> bool {
  // Dynamic bitrate changes need API 19.
  if device.sdk_int < version_codes::KITKAT {
    return false;
  }

  if mime == mime_types::VIDEO_H264
    && H264_ENCODER_MODEL_BLACKLIST.contains(&device.model.as_str())
  {
    tracing::warn!(
      target: "mediacodec",
      "Model: {} has blacklisted H.264 encoder.",
      device.model
    );
    return false;
  }

  true
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::version_codes::*;

  fn device(manufacturer: &str, model: &str, hardware: &str, sdk_int: u32) -> DeviceFingerprint {
    DeviceFingerprint::new(manufacturer, model, hardware, sdk_int, "test")
  }

  #[test]
  fn test_unlisted_mimes_are_allowed() {
    let ancient = device("samsung", "GT-I9190", "mt6589", 10);
    for mime in [
      mime_types::VIDEO_H264,
      mime_types::VIDEO_H265,
      "audio/mp4a-latm",
      "video/x-unknown",
    ] {
      assert!(is_decoder_supported_for_device(mime, &ancient), "{mime}");
      assert!(is_adaptive_playback_allowed(mime, &ancient), "{mime}");
    }
  }

  #[test]
  fn test_vp8_denied_before_jelly_bean_mr2() {
    let d = device("Google", "Nexus", "qcom", JELLY_BEAN_MR2 - 1);
    assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));

    let d = device("Google", "Nexus", "qcom", JELLY_BEAN_MR2);
    assert!(is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));
  }

  #[test]
  fn test_vp8_galaxy_s4_denied_only_before_lollipop() {
    let d = device("samsung", "GT-I9505G", "qcom", KITKAT);
    assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));

    let d = device("SAMSUNG", "GT-I9500", "qcom", LOLLIPOP);
    assert!(is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));
  }

  #[test]
  fn test_vp8_galaxy_s4_mini_always_denied() {
    for sdk in [KITKAT, LOLLIPOP, N] {
      let d = device("Samsung", "GT-I9195", "qcom", sdk);
      assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));
    }
  }

  #[test]
  fn test_vp8_samsung_families_denied_before_kitkat() {
    for model in ["GT-N7100", "SCH-I545", "SM-T310"] {
      let old = device("samsung", model, "qcom", JELLY_BEAN_MR2);
      assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP8, &old));

      let new = device("samsung", model, "qcom", KITKAT);
      assert!(is_decoder_supported_for_device(mime_types::VIDEO_VP8, &new));
    }
  }

  #[test]
  fn test_vp8_model_denials_need_samsung() {
    let d = device("lge", "GT-I9195", "qcom", KITKAT);
    assert!(is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));
  }

  #[test]
  fn test_vp8_mediatek_always_denied() {
    let d = device("Xiaomi", "Redmi", "mt6797", N);
    assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP8, &d));
  }

  #[test]
  fn test_vp9_gates() {
    let d = device("Google", "Nexus", "qcom", KITKAT - 1);
    assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP9, &d));

    let mtk = device("Xiaomi", "Redmi", "mt6589", KITKAT);
    assert!(!is_decoder_supported_for_device(mime_types::VIDEO_VP9, &mtk));

    let mtk = device("Xiaomi", "Redmi", "mt6589", LOLLIPOP);
    assert!(is_decoder_supported_for_device(mime_types::VIDEO_VP9, &mtk));
  }

  #[test]
  fn test_opus_needs_lollipop() {
    let d = device("Google", "Nexus", "qcom", KITKAT);
    assert!(!is_decoder_supported_for_device(mime_types::AUDIO_OPUS, &d));

    let d = device("Google", "Nexus", "qcom", LOLLIPOP);
    assert!(is_decoder_supported_for_device(mime_types::AUDIO_OPUS, &d));
  }

  #[test]
  fn test_quirk_mimes_match_exactly() {
    let d = device("Google", "Nexus", "qcom", 10);
    assert!(is_decoder_supported_for_device("VIDEO/X-VND.ON2.VP8", &d));
  }

  #[test]
  fn test_adaptive_playback_denied_for_galaxy_s3_on_4_4_2() {
    let d = DeviceFingerprint::new("samsung", "GT-I9300", "smdk4x12", KITKAT, "4.4.2");
    assert!(!is_adaptive_playback_allowed(mime_types::VIDEO_H264, &d));
    assert!(!is_adaptive_playback_allowed(mime_types::VIDEO_H264_AVC1, &d));
    // Decoding itself stays allowed
    assert!(is_decoder_supported_for_device(mime_types::VIDEO_H264, &d));

    let d = DeviceFingerprint::new("Samsung", "SCH-I535", "qcom", KITKAT, "4.4.2");
    assert!(!is_adaptive_playback_allowed(mime_types::VIDEO_H264, &d));
  }

  #[test]
  fn test_adaptive_playback_needs_every_condition() {
    let base = DeviceFingerprint::new("samsung", "GT-I9300", "smdk4x12", KITKAT, "4.4.2");

    assert!(is_adaptive_playback_allowed(mime_types::VIDEO_VP8, &base));

    let other_release = DeviceFingerprint { release: "4.4.4".into(), ..base.clone() };
    assert!(is_adaptive_playback_allowed(mime_types::VIDEO_H264, &other_release));

    let other_vendor = DeviceFingerprint { manufacturer: "lge".into(), ..base.clone() };
    assert!(is_adaptive_playback_allowed(mime_types::VIDEO_H264, &other_vendor));

    let other_model = DeviceFingerprint { model: "GT-I9505".into(), ..base };
    assert!(is_adaptive_playback_allowed(mime_types::VIDEO_H264, &other_model));
  }

  #[test]
  fn test_encoder_needs_kitkat() {
    let d = device("Google", "Pixel", "qcom", KITKAT - 1);
    assert!(!is_encoder_allowed_for_device(mime_types::VIDEO_VP8, &d));

    let d = device("Google", "Pixel", "qcom", KITKAT);
    assert!(is_encoder_allowed_for_device(mime_types::VIDEO_VP8, &d));
  }

  #[test]
  fn test_h264_encoder_model_blacklist() {
    for model in H264_ENCODER_MODEL_BLACKLIST {
      let d = device("any", model, "qcom", N);
      assert!(!is_encoder_allowed_for_device(mime_types::VIDEO_H264, &d));
      assert!(is_encoder_allowed_for_device(mime_types::VIDEO_VP8, &d));
    }

    // Exact model equality, not prefix
    let d = device("asus", "Nexus 7 (2013)", "flo", N);
    assert!(is_encoder_allowed_for_device(mime_types::VIDEO_H264, &d));
  }
}
