//! The copyright banner prepended to every stamped source file.

/// The fixed banner, one `\n`-terminated line per row, ready to be written
/// in front of the original file bytes.
pub const BANNER: &str = concat!(
  "/*\n",
  "================================================================================================\n",
  "CONFIDENTIAL AND PROPRIETARY INFORMATION/NOT FOR DISCLOSURE WITHOUT WRITTEN PERMISSION\n",
  "Copyright 2017 Doctor Entertainment AB. All Rights Reserved.\n",
  "================================================================================================\n",
  "*/\n",
);

/// Counts how many times `banner` appears back to back at the start of
/// `content`.
///
/// The stamper never consults this; it exists so callers can observe banner
/// accumulation across repeated runs.
pub fn count_leading_banners(content: &[u8], banner: &str) -> usize {
  let banner = banner.as_bytes();
  if banner.is_empty() {
    return 0;
  }

  let mut count = 0;
  let mut rest = content;
  while let Some(tail) = rest.strip_prefix(banner) {
    count += 1;
    rest = tail;
  }
  count
}
