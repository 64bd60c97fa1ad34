//! Per-vendor filename decoders.
//!
//! Every decoder is a pure function of the path; malformed names are
//! reported, never patched up with defaults.

use std::ops::Range;
use std::path::{Component, Path};

use crate::consts::{
    IMAGE_EXTENSION, IX_CHANNEL_CHAR, IX_CHANNEL_TOKEN, IX_PATH_COMPONENTS, IX_SITE_TOKEN,
    IX_WELL_TOKEN, OPERA_CHANNEL_START, OPERA_COLUMN, OPERA_ROW, OPERA_SITE_DELIMITER, OPERA_Z,
    YOKO_CHANNEL_WIDTH, YOKO_SITE, YOKO_TOKEN_COUNT, YOKO_Z,
};
use crate::error::{PlateBatchError, Result};

use super::well::{column_from_well, row_from_well, well_from_row_column};
use super::{ImageRecord, Vendor};

/// Decodes a full record from an image path.
pub type RecordDecoder = fn(&Path) -> Result<ImageRecord>;

/// Decodes only the channel number from an image path.
pub type ChannelDecoder = fn(&Path) -> Result<u32>;

/// The pair of decoders implementing one vendor's filename convention.
#[derive(Clone, Copy)]
pub(crate) struct Codec {
    pub record: RecordDecoder,
    pub channel: ChannelDecoder,
}

pub(crate) fn codec_for(vendor: Vendor) -> Codec {
    match vendor {
        Vendor::ImageXpress => Codec {
            record: imagexpress_record,
            channel: imagexpress_channel,
        },
        Vendor::Yokogawa => Codec {
            record: yokogawa_record,
            channel: yokogawa_channel,
        },
        Vendor::Opera => Codec {
            record: opera_record,
            channel: opera_channel,
        },
    }
}

// ---------------------------------------------------------------------------
// ImageXpress
// ---------------------------------------------------------------------------

const IX_CHANNEL_MARKER: u8 = b'w';

fn imagexpress_tokens(path: &Path) -> Result<(&str, Vec<&str>)> {
    let name = file_name(path)?;
    let tokens: Vec<&str> = name.split('_').collect();
    if tokens.len() <= IX_CHANNEL_TOKEN {
        return Err(PlateBatchError::parse(
            name,
            format!(
                "expected at least {} '_'-separated fields, found {}",
                IX_CHANNEL_TOKEN + 1,
                tokens.len()
            ),
        ));
    }
    Ok((name, tokens))
}

fn imagexpress_channel(path: &Path) -> Result<u32> {
    let (name, tokens) = imagexpress_tokens(path)?;
    let token = tokens[IX_CHANNEL_TOKEN].as_bytes();
    if !token.first().is_some_and(|b| b.eq_ignore_ascii_case(&IX_CHANNEL_MARKER)) {
        return Err(PlateBatchError::parse(
            name,
            "channel field must start with 'w'",
        ));
    }
    match token.get(IX_CHANNEL_CHAR) {
        Some(b) if b.is_ascii_digit() => Ok(u32::from(b - b'0')),
        _ => Err(PlateBatchError::parse(
            name,
            "channel marker is not followed by a digit",
        )),
    }
}

fn imagexpress_record(path: &Path) -> Result<ImageRecord> {
    let (name, tokens) = imagexpress_tokens(path)?;
    let well = tokens[IX_WELL_TOKEN];
    let row = row_from_well(well)?;
    let column = column_from_well(well)?;

    let site_digits: String = tokens[IX_SITE_TOKEN]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let site = digits(name, &site_digits, "site")?;

    // plate/date/run-id/file: the plate sits three directories up.
    let plate = match path.components().rev().nth(IX_PATH_COMPONENTS - 1) {
        Some(Component::Normal(dir)) => dir.to_string_lossy().into_owned(),
        _ => {
            return Err(PlateBatchError::parse(
                path.to_string_lossy(),
                format!("expected at least {IX_PATH_COMPONENTS} path components"),
            ))
        }
    };

    Ok(ImageRecord {
        well: well.to_string(),
        row,
        column,
        site,
        plate,
        z: 1,
        channel: imagexpress_channel(path)?,
        path: dir_name(path),
        file_name: name.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Yokogawa
// ---------------------------------------------------------------------------

fn yokogawa_tokens(path: &Path) -> Result<(&str, [&str; YOKO_TOKEN_COUNT])> {
    let name = file_name(path)?;
    let tokens: Vec<&str> = name.split('_').collect();
    let [plate, well, rest]: [&str; YOKO_TOKEN_COUNT] = tokens.try_into().map_err(|t: Vec<&str>| {
        PlateBatchError::parse(
            name,
            format!(
                "expected exactly {YOKO_TOKEN_COUNT} '_'-separated fields, found {}",
                t.len()
            ),
        )
    })?;
    Ok((name, [plate, well, strip_extension(name, rest)?]))
}

fn yokogawa_channel(path: &Path) -> Result<u32> {
    let (name, [_, _, acquisition]) = yokogawa_tokens(path)?;
    let start = acquisition.len().checked_sub(YOKO_CHANNEL_WIDTH).ok_or_else(|| {
        PlateBatchError::parse(name, "acquisition field too short for a channel")
    })?;
    digits(name, slice(name, acquisition, start..acquisition.len())?, "channel")
}

fn yokogawa_record(path: &Path) -> Result<ImageRecord> {
    let (name, [plate, well, acquisition]) = yokogawa_tokens(path)?;
    Ok(ImageRecord {
        well: well.to_string(),
        row: row_from_well(well)?,
        column: column_from_well(well)?,
        site: digits(name, slice(name, acquisition, YOKO_SITE)?, "site")?,
        plate: plate.to_string(),
        z: digits(name, slice(name, acquisition, YOKO_Z)?, "z-plane")?,
        channel: yokogawa_channel(path)?,
        path: dir_name(path),
        file_name: name.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Opera
// ---------------------------------------------------------------------------

fn opera_channel(path: &Path) -> Result<u32> {
    let name = file_name(path)?;
    let stem = strip_extension(name, name)?;
    let channel = stem.get(OPERA_CHANNEL_START..).unwrap_or_default();
    digits(name, channel, "channel")
}

fn opera_record(path: &Path) -> Result<ImageRecord> {
    let name = file_name(path)?;
    let stem = strip_extension(name, name)?;

    let row = digits(name, slice(name, stem, OPERA_ROW)?, "row")?;
    let column = digits(name, slice(name, stem, OPERA_COLUMN)?, "column")?;
    let site = stem
        .split(OPERA_SITE_DELIMITER)
        .nth(1)
        .ok_or_else(|| PlateBatchError::parse(name, "missing '-' before the site number"))?;

    let plate = path
        .parent()
        .and_then(Path::file_name)
        .map(|p| p.to_string_lossy().into_owned())
        .ok_or_else(|| PlateBatchError::parse(name, "no parent plate directory"))?;

    Ok(ImageRecord {
        well: well_from_row_column(row, column)?,
        row,
        column,
        site: digits(name, site, "site")?,
        plate,
        z: digits(name, slice(name, stem, OPERA_Z)?, "z-plane")?,
        channel: opera_channel(path)?,
        path: dir_name(path),
        file_name: name.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PlateBatchError::parse(path.to_string_lossy(), "no UTF-8 file name"))
}

fn dir_name(path: &Path) -> String {
    path.parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn strip_extension<'a>(name: &str, field: &'a str) -> Result<&'a str> {
    field.strip_suffix(IMAGE_EXTENSION).ok_or_else(|| {
        PlateBatchError::parse(name, format!("expected a '{IMAGE_EXTENSION}' extension"))
    })
}

fn slice<'a>(name: &str, field: &'a str, range: Range<usize>) -> Result<&'a str> {
    field.get(range.clone()).ok_or_else(|| {
        PlateBatchError::parse(
            name,
            format!("'{field}' has no characters at {}..{}", range.start, range.end),
        )
    })
}

fn digits(name: &str, field: &str, what: &str) -> Result<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PlateBatchError::parse(
            name,
            format!("{what} '{field}' is not a number"),
        ));
    }
    field
        .parse()
        .map_err(|_| PlateBatchError::parse(name, format!("{what} '{field}' is out of range")))
}
