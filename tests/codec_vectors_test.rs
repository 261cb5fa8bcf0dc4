//! Literal encode/decode vectors, cross-checked against the maritec online
//! decoder and OpenCPN.

use approx::assert_relative_eq;

use aisbridge::ais::{self, CommonNavigationBlock};

fn report(
    mmsi: u32,
    nav_status: u8,
    rate_of_turn: i16,
    speed_over_ground: f64,
    position_accuracy: bool,
    longitude: f64,
    latitude: f64,
    course_over_ground: f64,
    timestamp: u8,
    raim: bool,
    radio_status: u32,
) -> CommonNavigationBlock {
    CommonNavigationBlock {
        mmsi,
        nav_status,
        rate_of_turn,
        speed_over_ground,
        position_accuracy,
        longitude,
        latitude,
        course_over_ground,
        timestamp,
        raim,
        radio_status,
        ..Default::default()
    }
}

#[test]
fn test_encode_gps_fix_with_defaults() {
    let block = CommonNavigationBlock {
        mmsi: 123_456_789,
        longitude: -72.0,
        latitude: 49.40,
        timestamp: 60,
        ..Default::default()
    };
    assert_eq!(
        ais::encode_payload(&block).unwrap(),
        "11mg=5HP?wJnJ@0LA5@>4?wp0000"
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,11mg=5HP?wJnJ@0LA5@>4?wp0000,0*20"
    );
}

#[test]
fn test_encode_then_decode_keeps_the_fix() {
    let block = CommonNavigationBlock {
        mmsi: 123_456_789,
        longitude: -72.0,
        latitude: 49.40,
        timestamp: 60,
        ..Default::default()
    };
    let decoded = ais::decode_payload(&ais::encode_payload(&block).unwrap()).unwrap();
    assert_eq!(decoded.message_type, 1);
    assert_eq!(decoded.mmsi, 123_456_789);
    assert_eq!(decoded.nav_status, 8);
    assert_eq!(decoded.rate_of_turn, 128);
    assert_eq!(decoded.speed_over_ground, 1023.0);
    assert_relative_eq!(decoded.longitude, -72.0, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 49.4, epsilon = 1e-5);
    assert_eq!(decoded.course_over_ground, 3600.0);
    assert_eq!(decoded.true_heading, 511);
    assert_eq!(decoded.timestamp, 60);
}

#[test]
fn test_decode_class_a_off_dover() {
    let decoded = ais::decode_payload("13HOI:0P0000VOHLCnHQKwvL05Ip").unwrap();
    assert_eq!(decoded.mmsi, 227_006_760);
    assert_eq!(decoded.nav_status, 0);
    assert_eq!(decoded.rate_of_turn, 128);
    assert_eq!(decoded.speed_over_ground, 0.0);
    assert!(!decoded.position_accuracy);
    assert_relative_eq!(decoded.longitude, 0.131_38, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 49.475_576_7, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 36.7, epsilon = 1e-9);
    assert_eq!(decoded.true_heading, 511);
    assert_eq!(decoded.timestamp, 14);
    assert_eq!(decoded.maneuver, 0);
    assert!(!decoded.raim);
    assert_eq!(decoded.radio_status, 22136);
}

#[test]
fn test_decode_full_sentence_matches_payload_decode() {
    let from_sentence = ais::decode("!AIVDM,1,1,,A,13HOI:0P0000VOHLCnHQKwvL05Ip,0*23").unwrap();
    let from_payload = ais::decode_payload("13HOI:0P0000VOHLCnHQKwvL05Ip").unwrap();
    assert_eq!(from_sentence, from_payload);
}

#[test]
fn test_decode_scheldt_vector() {
    let decoded = ais::decode("!AIVDM,1,1,,A,133sVfPP00PD>hRMDH@jNOvN20S8,0*7F").unwrap();
    assert_eq!(decoded.mmsi, 205_448_890);
    assert!(decoded.position_accuracy);
    assert_relative_eq!(decoded.longitude, 4.419_441_7, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 51.237_658_3, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 63.3, epsilon = 1e-9);
    assert_eq!(decoded.timestamp, 15);
    assert!(decoded.raim);
    assert_eq!(decoded.radio_status, 2248);
}

#[test]
fn test_encode_scheldt_station_swapped_coordinates() {
    // same station with lon/lat transposed, as published by the upstream
    // test site
    let block = report(
        205_448_890,
        0,
        -128,
        0.0,
        true,
        51.237_658_3,
        4.419_441_7,
        6.3,
        15,
        true,
        0,
    );
    assert_eq!(
        ais::encode_payload(&block).unwrap(),
        "133sVfPP00SbS242Qn4@?wvN2000"
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,133sVfPP00SbS242Qn4@?wvN2000,0*3B"
    );
}

#[test]
fn test_decode_ijsselmeer_vector() {
    let decoded = ais::decode("!AIVDM,1,1,,B,100h00PP0@PHFV`Mg5gTH?vNPUIp,0*3B").unwrap();
    assert_eq!(decoded.mmsi, 786_434);
    assert_eq!(decoded.rate_of_turn, 128);
    assert_relative_eq!(decoded.speed_over_ground, 1.6, epsilon = 1e-9);
    assert!(decoded.position_accuracy);
    assert_relative_eq!(decoded.longitude, 5.320_033_3, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 51.967_036_7, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 112.0, epsilon = 1e-9);
    assert_eq!(decoded.timestamp, 15);
    assert_eq!(decoded.maneuver, 1);
    assert_eq!(decoded.radio_status, 153_208);
}

#[test]
fn test_decode_piraeus_vector() {
    let decoded = ais::decode("!AIVDM,1,1,,B,13eaJF0P00Qd388Eew6aagvH85Ip,0*45").unwrap();
    assert_eq!(decoded.mmsi, 249_191_000);
    assert_relative_eq!(decoded.longitude, 23.603_633_3, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 37.955_883_3, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 247.0, epsilon = 1e-9);
    assert_eq!(decoded.timestamp, 12);
    assert_eq!(decoded.spare, 0b010);
}

#[test]
fn test_encode_prince_rupert_with_radio_status() {
    let block = report(
        316_013_198,
        0,
        -128,
        0.0,
        true,
        -130.316_236_7,
        54.321_110_0,
        237.9,
        16,
        true,
        81935,
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,14eGrSPP00ncMJTO5C6aBwvP2D0?,0*7A"
    );
    let decoded = ais::decode_payload("14eGrSPP00ncMJTO5C6aBwvP2D0?").unwrap();
    assert_relative_eq!(decoded.longitude, -130.316_236_7, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 54.321_110_0, epsilon = 1e-5);
    assert_eq!(decoded.radio_status, 81935);
}

#[test]
fn test_encode_positive_rate_of_turn() {
    let block = report(
        205_448_890,
        0,
        20,
        0.0,
        true,
        51.237_658_3,
        4.419_441_7,
        6.3,
        15,
        true,
        0,
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,133sVfP5@0SbS242Qn4@?wvN2000,0*2E"
    );
}

#[test]
fn test_encode_large_rate_of_turn() {
    let block = report(
        205_448_891,
        0,
        108,
        0.0,
        true,
        0.0,
        4.419_441_7,
        6.3,
        15,
        true,
        0,
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,133sVfh<@0P00002Qn4@?wvN2000,0*2B"
    );
}

#[test]
fn test_encode_negative_rate_of_turn() {
    let block = report(
        205_448_892,
        0,
        -20,
        0.0,
        true,
        -80.0,
        4.419_441_7,
        6.3,
        15,
        true,
        0,
    );
    assert_eq!(
        ais::encode(&block).unwrap(),
        "!AIVDM,1,1,,A,133sVg0rh0rAjP02Qn4@?wvN2000,0*7D"
    );
    // opposite signs must not armor identically
    let mut positive = block;
    positive.rate_of_turn = 20;
    assert_ne!(
        ais::encode_payload(&positive).unwrap(),
        "133sVg0rh0rAjP02Qn4@?wvN2000"
    );
}

#[test]
fn test_decode_virgin_islands_vector() {
    let decoded = ais::decode_payload("15MrVH0000KH<:V:NtBLoqFP2H9:").unwrap();
    assert_eq!(decoded.mmsi, 366_913_120);
    assert_eq!(decoded.rate_of_turn, 0);
    assert_relative_eq!(decoded.longitude, -64.620_661_7, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 18.321_188_3, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 329.5, epsilon = 1e-9);
    assert_eq!(decoded.true_heading, 299);
    assert_eq!(decoded.timestamp, 16);
    assert!(decoded.raim);
    assert_eq!(decoded.radio_status, 98890);
}

#[test]
fn test_decode_mississippi_vector() {
    let decoded = ais::decode_payload("15N9NLPP01IS<RFF7fLVmgvN00Rv").unwrap();
    assert_eq!(decoded.mmsi, 367_156_850);
    assert_relative_eq!(decoded.speed_over_ground, 0.1, epsilon = 1e-9);
    assert_relative_eq!(decoded.longitude, -90.178_435_0, epsilon = 1e-5);
    assert_relative_eq!(decoded.latitude, 38.658_750_0, epsilon = 1e-5);
    assert_relative_eq!(decoded.course_over_ground, 175.0, epsilon = 1e-9);
    assert_eq!(decoded.timestamp, 15);
}
