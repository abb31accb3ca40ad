#![deny(clippy::all)]

//! Device-aware MediaCodec selection
//!
//! Resolves which platform codec implementation to use for a mime type and
//! direction, and whether device-specific quirks rule an otherwise
//! available codec out.

// Platform collaborator interfaces (enumeration, construction, device info)
pub mod platform;

// Codec selection core
pub mod codec;

// Node.js API surface (NAPI classes)
pub mod node;

#[cfg(test)]
pub(crate) mod testing;

// Re-export the resolver surface at crate root
pub use codec::{
  BitrateAdjustment, CodecCreation, CodecError, CodecRegistry, CodecResolver, CodecResult,
  CreatedCodec, Direction, HardwareEncoderMatch, HwEncoderRule,
};
pub use node::{
  BitrateAdjustmentType, CodecDirection, CodecInfo, CodecPolicy, CodecTypeCapabilities,
  DeviceProfile, HardwareEncoder,
};
pub use platform::{
  CodecCapabilities, CodecDescriptor, CodecFactory, CodecList, CryptoInfo, DeviceFingerprint,
  DeviceInfo, EncryptionPattern, MediaCodecHandle, PlatformError, PlatformResult,
};
