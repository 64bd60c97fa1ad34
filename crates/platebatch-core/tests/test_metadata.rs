use std::path::Path;

use platebatch_core::error::PlateBatchError;
use platebatch_core::metadata::{
    column_from_well, row_from_well, well_from_row_column, MetadataParser, Vendor, VendorAliases,
};

// ---------------------------------------------------------------------------
// Vendor aliases
// ---------------------------------------------------------------------------

#[test]
fn test_aliases_resolve_case_insensitively() {
    let aliases = VendorAliases::default();
    assert_eq!(aliases.resolve("IX").unwrap(), Vendor::ImageXpress);
    assert_eq!(aliases.resolve(" MolDev ").unwrap(), Vendor::ImageXpress);
    assert_eq!(aliases.resolve("cv7000").unwrap(), Vendor::Yokogawa);
    assert_eq!(aliases.resolve("Harmony").unwrap(), Vendor::Opera);
}

#[test]
fn test_unknown_vendor_lists_aliases() {
    let err = VendorAliases::default().resolve("nikon").unwrap_err();
    match err {
        PlateBatchError::UnknownVendor { ref given, ref valid } => {
            assert_eq!(given, "nikon");
            assert!(valid.contains("imagexpress"), "got: {valid}");
            assert!(valid.contains("cv8000"), "got: {valid}");
            assert!(valid.contains("columbus"), "got: {valid}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_vendor_from_str_uses_default_aliases() {
    assert_eq!("yoko".parse::<Vendor>().unwrap(), Vendor::Yokogawa);
    assert!("confocal".parse::<Vendor>().is_err());
}

#[test]
fn test_custom_alias_table() {
    let aliases = VendorAliases::new([("phenix", Vendor::Opera)]);
    assert_eq!(aliases.resolve("PHENIX").unwrap(), Vendor::Opera);
    assert!(aliases.resolve("opera").is_err());
}

#[test]
fn test_parser_from_tag() {
    let parser = MetadataParser::from_tag("ix", &VendorAliases::default()).unwrap();
    assert_eq!(parser.vendor(), Vendor::ImageXpress);
}

// ---------------------------------------------------------------------------
// Well labels
// ---------------------------------------------------------------------------

#[test]
fn test_well_round_trip_over_384_plate() {
    for row in 1..=16 {
        for column in 1..=24 {
            let well = well_from_row_column(row, column).unwrap();
            assert_eq!(row_from_well(&well).unwrap(), row, "well {well}");
            assert_eq!(column_from_well(&well).unwrap(), column, "well {well}");
        }
    }
}

#[test]
fn test_well_label_is_zero_padded() {
    assert_eq!(well_from_row_column(2, 2).unwrap(), "B02");
    assert_eq!(well_from_row_column(16, 24).unwrap(), "P24");
}

#[test]
fn test_malformed_well_labels() {
    assert!(row_from_well("").is_err());
    assert!(row_from_well("02").is_err());
    assert!(column_from_well("B").is_err());
    assert!(column_from_well("Bx2").is_err());
    assert!(column_from_well("B00").is_err());
    assert!(well_from_row_column(0, 1).is_err());
    assert!(well_from_row_column(1, 0).is_err());
}

// ---------------------------------------------------------------------------
// ImageXpress
// ---------------------------------------------------------------------------

#[test]
fn test_parse_imagexpress() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    let path = "test-plate-1/2015-07-31/4016/val screen_B02_s1_w1AD0A.tif";
    let record = parser.parse_filepath(path).unwrap();

    assert_eq!(record.well, "B02");
    assert_eq!(record.row, 2);
    assert_eq!(record.column, 2);
    assert_eq!(record.site, 1);
    assert_eq!(record.channel, 1);
    assert_eq!(record.z, 1);
    assert_eq!(record.plate, "test-plate-1");
    assert_eq!(record.path, "test-plate-1/2015-07-31/4016");
    assert_eq!(record.file_name, "val screen_B02_s1_w1AD0A.tif");
}

#[test]
fn test_parse_imagexpress_absolute_path() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    let path = "/data/exp/plate-7/2015-07-31/4016/val screen_H12_s6_w5AD0A.tif";
    let record = parser.parse_filepath(path).unwrap();

    assert_eq!(record.plate, "plate-7");
    assert_eq!((record.row, record.column), (8, 12));
    assert_eq!(record.site, 6);
    assert_eq!(record.channel, 5);
}

#[test]
fn test_parse_imagexpress_needs_plate_directory() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    let err = parser
        .parse_filepath("4016/val screen_B02_s1_w1AD0A.tif")
        .unwrap_err();
    assert!(matches!(err, PlateBatchError::Parse { .. }), "got: {err}");
}

#[test]
fn test_parse_imagexpress_rejects_missing_fields() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    for name in [
        "p/d/r/val screen_B02_s1.tif",
        "p/d/r/val screen_B02_sX_w1.tif",
        "p/d/r/val screen_B02_s1_wX.tif",
        "p/d/r/val screen_B02_s1_x1.tif",
        "p/d/r/val screen_202_s1_w1.tif",
    ] {
        assert!(parser.parse_filepath(name).is_err(), "{name} should fail");
    }
}

#[test]
fn test_parse_channel_only() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    // No plate directory needed to read the channel.
    assert_eq!(parser.parse_channel("val screen_B02_s1_w3AD0A.tif").unwrap(), 3);
}

// ---------------------------------------------------------------------------
// Yokogawa
// ---------------------------------------------------------------------------

#[test]
fn test_parse_yokogawa() {
    let parser = MetadataParser::new(Vendor::Yokogawa);
    let path = Path::new("/screen/A000002-PC/A000002-PC_C03_T0001F004L01A01Z02C03.tif");
    let record = parser.parse_filepath(path).unwrap();

    assert_eq!(record.plate, "A000002-PC");
    assert_eq!(record.well, "C03");
    assert_eq!((record.row, record.column), (3, 3));
    assert_eq!(record.site, 4);
    assert_eq!(record.z, 2);
    assert_eq!(record.channel, 3);
    assert_eq!(record.path, "/screen/A000002-PC");
}

#[test]
fn test_parse_yokogawa_requires_three_fields() {
    let parser = MetadataParser::new(Vendor::Yokogawa);
    let err = parser
        .parse_filepath("A000002_PC_C03_T0001F001L01A01Z01C01.tif")
        .unwrap_err();
    assert!(err.to_string().contains("exactly 3"), "got: {err}");
}

#[test]
fn test_parse_yokogawa_rejects_short_acquisition() {
    let parser = MetadataParser::new(Vendor::Yokogawa);
    assert!(parser.parse_filepath("A000002-PC_C03_T0001F001.tif").is_err());
    assert!(parser.parse_filepath("A000002-PC_C03_T0001F001L01A01Z01C01.png").is_err());
}

// ---------------------------------------------------------------------------
// Opera
// ---------------------------------------------------------------------------

#[test]
fn test_parse_opera() {
    let parser = MetadataParser::new(Vendor::Opera);
    let record = parser.parse_filepath("/some/plate-3/003012-2-001002004.tif").unwrap();

    assert_eq!(record.well, "C12");
    assert_eq!((record.row, record.column), (3, 12));
    assert_eq!(record.site, 2);
    assert_eq!(record.z, 2);
    assert_eq!(record.channel, 4);
    assert_eq!(record.plate, "plate-3");
}

#[test]
fn test_parse_opera_requires_plate_directory() {
    let parser = MetadataParser::new(Vendor::Opera);
    assert!(parser.parse_filepath("001002-1-001001001.tif").is_err());
}

#[test]
fn test_parse_list_stops_at_first_bad_path() {
    let parser = MetadataParser::new(Vendor::Opera);
    let paths = ["p/001002-1-001001001.tif", "p/garbage.tif", "p/001002-1-001001002.tif"];
    assert!(parser.parse_filepath_list(&paths).is_err());
    assert_eq!(parser.parse_filepath_list(&[paths[0], paths[2]]).unwrap().len(), 2);
}

#[test]
fn test_record_serializes_with_loaddata_names() {
    let parser = MetadataParser::new(Vendor::ImageXpress);
    let record = parser
        .parse_filepath("plate/2015-07-31/4016/val screen_B02_s1_w1AD0A.tif")
        .unwrap();
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["Metadata_well"], "B02");
    assert_eq!(json["Metadata_channel"], 1);
    assert_eq!(json["URL"], "val screen_B02_s1_w1AD0A.tif");
    assert_eq!(json["path"], "plate/2015-07-31/4016");
}
