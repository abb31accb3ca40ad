//! Node.js API surface
//!
//! Exposes the side-effect-free policy queries via NAPI-RS. Codec
//! construction stays native: a JavaScript snapshot has no platform codecs
//! to instantiate.

mod policy;

pub use policy::{
  is_software_codec_name, BitrateAdjustmentType, CodecDirection, CodecInfo, CodecPolicy,
  CodecTypeCapabilities, DeviceProfile, HardwareEncoder,
};
