use std::ops::Range;

/// Extension every vendor writes its image planes with.
pub const IMAGE_EXTENSION: &str = ".tif";

/// Default number of imagesets per job when chunking.
pub const DEFAULT_JOB_SIZE: usize = 96;

// ---------------------------------------------------------------------------
// ImageXpress: `<plate>/<date>/<run id>/<name>_<well>_s<site>_w<channel><uuid>.tif`
// ---------------------------------------------------------------------------

/// Directory depth of image files below an ImageXpress plate directory.
pub const IX_FILE_DEPTH: usize = 3;

/// Number of trailing path components kept for ImageXpress files
/// (plate, date, run id, file name).
pub const IX_PATH_COMPONENTS: usize = 4;

/// ImageXpress writes a thumbnail next to every plane; skip those.
pub const IX_EXCLUDE_MARKER: &str = "thumb";

/// `_`-delimited token holding the well, e.g. `B02`.
pub const IX_WELL_TOKEN: usize = 1;

/// `_`-delimited token holding the site, e.g. `s1`.
pub const IX_SITE_TOKEN: usize = 2;

/// `_`-delimited token holding the channel, e.g. `w1AD0A...`.
pub const IX_CHANNEL_TOKEN: usize = 3;

/// Byte offset of the channel digit inside the channel token (after `w`).
pub const IX_CHANNEL_CHAR: usize = 1;

// ---------------------------------------------------------------------------
// Yokogawa CV7000/CV8000: `<plate>_<well>_T0001F001L01A01Z01C01.tif`
//
// Markers in the acquisition token sit at fixed offsets:
// T=0 (timepoint), F=5 (field), L=9 (timeline), A=12 (action), Z=15, C=18.
// ---------------------------------------------------------------------------

/// Directory depth of image files below a Yokogawa plate directory.
pub const YOKO_FILE_DEPTH: usize = 1;

/// Camera-correction images written alongside the planes.
pub const YOKO_EXCLUDE_CAMERA: &str = "CAM#";

/// Secondary-channel marker for the first mode, which duplicates channel data.
pub const YOKO_EXCLUDE_SECONDARY: &str = "_M01_CH";

/// Number of `_`-delimited tokens in a Yokogawa file name.
pub const YOKO_TOKEN_COUNT: usize = 3;

/// Field (site) digits, the three characters after `F`.
pub const YOKO_SITE: Range<usize> = 6..9;

/// Z-plane digits, the two characters after `Z`.
pub const YOKO_Z: Range<usize> = 16..18;

/// Channel digits at the end of the acquisition token (`C01`).
pub const YOKO_CHANNEL_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Opera Phenix export: `RRRCCC-S-ZZZZZZCCC.tif`, e.g. `001002-1-001001001.tif`
// ---------------------------------------------------------------------------

/// Directory depth of image files below an Opera plate directory.
pub const OPERA_FILE_DEPTH: usize = 1;

/// Row digits.
pub const OPERA_ROW: Range<usize> = 1..3;

/// Column digits.
pub const OPERA_COLUMN: Range<usize> = 4..6;

/// Z-plane digits.
pub const OPERA_Z: Range<usize> = 13..15;

/// Channel digits run from here to the end of the stem.
pub const OPERA_CHANNEL_START: usize = 16;

/// Delimiter preceding the site number.
pub const OPERA_SITE_DELIMITER: char = '-';
