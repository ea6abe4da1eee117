mod common_tests {
    use crate::common::common::{bin2hex_string, est_speed, hex2bin};

    #[test]
    fn test_est_speed_regular() {
        assert_eq!(est_speed(1000, 1010, 5000), 500, "5000 bytes over 10 seconds");
    }

    #[test]
    fn test_est_speed_guards() {
        assert_eq!(est_speed(0, 1010, 5000), 0, "unset start time");
        assert_eq!(est_speed(1000, 0, 5000), 0, "unset last time");
        assert_eq!(est_speed(1000, 1010, 0), 0, "nothing transferred");
        assert_eq!(est_speed(1010, 1000, 5000), 0, "time went backwards");
        assert_eq!(est_speed(1000, 1000, 5000), 0, "no time elapsed");
    }

    #[test]
    fn test_hex2bin_roundtrip() {
        let bytes: [u8; 4] = hex2bin("deadBEEF").unwrap();
        assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(bin2hex_string(&bytes), "deadbeef");
    }

    #[test]
    fn test_hex2bin_rejects_bad_input() {
        assert!(hex2bin::<4>("deadbee").is_err(), "odd length");
        assert!(hex2bin::<4>("deadbeeg").is_err(), "non hex character");
    }
}
