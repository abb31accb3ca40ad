//! Software/hardware codec classification

/// Prefix of the platform's bundled software implementations
const SOFTWARE_PREFIX: &str = "OMX.google.";

/// Namespace shared by vendor hardware implementations
const HARDWARE_NAMESPACE: &str = "OMX.";

/// Return true if and only if `name` is a software codec.
///
/// Names outside the hardware namespace default to software: third-party
/// and test implementations are almost always software.
pub fn is_software_codec(name: &str) -> bool {
  if name.starts_with(SOFTWARE_PREFIX) {
    return true;
  }

  !name.starts_with(HARDWARE_NAMESPACE)
}
