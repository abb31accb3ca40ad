//! Platform version codes
//!
//! Every version gate in the crate compares against these API levels.

pub mod version_codes {
  /// Android 4.3
  pub const JELLY_BEAN_MR2: u32 = 18;
  /// Android 4.4
  pub const KITKAT: u32 = 19;
  /// Android 5.0
  pub const LOLLIPOP: u32 = 21;
  /// Android 6.0
  pub const M: u32 = 23;
  /// Android 7.0
  pub const N: u32 = 24;
}
