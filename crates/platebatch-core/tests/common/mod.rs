use std::fs;
use std::path::{Path, PathBuf};

use platebatch_core::metadata::well_from_row_column;

/// Rows B..G by columns 2..11 give the 60 inner wells of a 96-well plate.
pub fn inner_wells(count: usize) -> Vec<String> {
    (2..=7)
        .flat_map(|row| (2..=11).map(move |col| well_from_row_column(row, col).unwrap()))
        .take(count)
        .collect()
}

/// Create an empty file, including missing parent directories.
pub fn touch(path: &Path) {
    fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
    fs::write(path, b"").expect("write file");
}

pub fn ix_file_name(well: &str, site: u32, channel: u32) -> String {
    format!("val screen_{well}_s{site}_w{channel}AD0ABEBC-3BA8-4199-9431-041A4D5B8C32.tif")
}

/// In-memory ImageXpress listing as `files_from_plate` would return it.
pub fn ix_paths(plate: &str, wells: usize, sites: u32, channels: u32) -> Vec<PathBuf> {
    let image_dir = Path::new(plate).join("2015-07-31").join("4016");
    let mut paths = Vec::new();
    for well in inner_wells(wells) {
        for site in 1..=sites {
            for channel in 1..=channels {
                paths.push(image_dir.join(ix_file_name(&well, site, channel)));
            }
        }
    }
    paths
}

/// Build `<root>/<plate>/2015-07-31/4016/` with one plane per well, site and
/// channel, plus a thumbnail per site that the lister must skip.
pub fn build_ix_plate(root: &Path, plate: &str, wells: usize, sites: u32, channels: u32) -> PathBuf {
    let plate_dir = root.join(plate);
    let image_dir = plate_dir.join("2015-07-31").join("4016");
    for well in inner_wells(wells) {
        for site in 1..=sites {
            for channel in 1..=channels {
                touch(&image_dir.join(ix_file_name(&well, site, channel)));
            }
            touch(&image_dir.join(format!("val screen_{well}_s{site}_thumbAD0A.tif")));
        }
    }
    touch(&image_dir.join("notes.txt"));
    plate_dir
}

pub fn yoko_file_name(plate: &str, well: &str, site: u32, z: u32, channel: u32) -> String {
    format!("{plate}_{well}_T0001F{site:03}L01A01Z{z:02}C{channel:02}.tif")
}

/// Flat Yokogawa plate directory with camera and secondary-mode side files.
pub fn build_yoko_plate(
    root: &Path,
    plate: &str,
    wells: usize,
    sites: u32,
    z_planes: u32,
    channels: u32,
) -> PathBuf {
    let plate_dir = root.join(plate);
    for well in inner_wells(wells) {
        for site in 1..=sites {
            for z in 1..=z_planes {
                for channel in 1..=channels {
                    touch(&plate_dir.join(yoko_file_name(plate, &well, site, z, channel)));
                }
            }
        }
    }
    touch(&plate_dir.join(format!("{plate}_CAM#1_correction.tif")));
    touch(&plate_dir.join(format!("{plate}_M01_CH01_mode.tif")));
    touch(&plate_dir.join("MeasurementData.mlf"));
    plate_dir
}

pub fn opera_file_name(row: u32, column: u32, site: u32, z: u32, channel: u32) -> String {
    format!("{row:03}{column:03}-{site}-001{z:03}{channel:03}.tif")
}

/// Flat Opera plate directory; wells are (row, column) pairs.
pub fn build_opera_plate(
    root: &Path,
    plate: &str,
    wells: &[(u32, u32)],
    sites: u32,
    channels: u32,
) -> PathBuf {
    let plate_dir = root.join(plate);
    for &(row, column) in wells {
        for site in 1..=sites {
            for channel in 1..=channels {
                touch(&plate_dir.join(opera_file_name(row, column, site, 1, channel)));
            }
        }
    }
    plate_dir
}
