//! Integration tests for header decoding
//!
//! Exercises the public API end to end: known headers from real files, every
//! rejection reason in precedence order, and the printed field list.

use mp3_header_rs::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> DecodedHeader {
        decode_hex(text).unwrap_or_else(|err| panic!("{:?} should decode: {}", text, err))
    }

    #[test]
    fn test_common_mp3_header_output() {
        let header = decode("FF FB 90 64");
        let expected = "\
Sync Word: (Valid)
MPEG Audio Version: MPEG Version 1
Layer: Layer III
Protection: No CRC
Bitrate: 128 kbps
Sampling Rate: 44100 Hz
Padding: Not padded
Private Bit: Private bit not set
Channel Mode: Joint stereo (Stereo)
Mode Extension: Intensity stereo
Copyright: Copyright bit not set
Original: Original media
Emphasis: No emphasis";
        assert_eq!(header.to_string(), expected);
    }

    #[test]
    fn test_encoder_output_headers() {
        // 128 kbps 44.1 kHz stereo, padded, as written by shine
        let header = decode("FF FB 92 04");
        assert_eq!(header.bitrate(), Bitrate::Kbps(128));
        assert!(header.padded());
        assert_eq!(header.channel_mode(), ChannelMode::Stereo);
        assert_eq!(header.mode_extension(), ModeExtension::NotApplicable);

        // MPEG-2 Layer III 64 kbps 22.05 kHz mono
        let header = decode("FF F3 80 C4");
        assert_eq!(header.version(), MpegVersion::Mpeg2);
        assert_eq!(header.bitrate(), Bitrate::Kbps(64));
        assert_eq!(header.sample_rate(), 22050);
        assert_eq!(header.channel_mode(), ChannelMode::SingleChannel);

        // MPEG-2.5 Layer III 8 kbps 8 kHz
        let header = decode("FF E3 18 C4");
        assert_eq!(header.version(), MpegVersion::Mpeg25);
        assert_eq!(header.bitrate(), Bitrate::Kbps(8));
        assert_eq!(header.sample_rate(), 8000);
    }

    #[test]
    fn test_crc_protected_layer1_joint_stereo() {
        // MPEG-1 Layer I with CRC, 288 kbps, 48 kHz, joint stereo bands 16-31
        let header = decode("FF FE 94 70");
        assert_eq!(header.layer(), Layer::LayerI);
        assert!(header.crc_protected());
        assert_eq!(header.bitrate(), Bitrate::Kbps(288));
        assert_eq!(header.sample_rate(), 48000);
        assert_eq!(header.mode_extension().to_string(), "Intensity stereo: Bands 16 to 31");
        assert!(header.to_string().contains("Protection: Protected by CRC"));
    }

    #[test]
    fn test_layer1_has_no_channel_mode_rule() {
        // 448 kbps single channel would be rejected for Layer II
        let header = decode("FF FF E0 C0");
        assert_eq!(header.bitrate(), Bitrate::Kbps(448));
        assert_eq!(header.channel_mode(), ChannelMode::SingleChannel);
    }

    #[test]
    fn test_layer2_single_channel_320_rejected() {
        assert_eq!(decode_hex("FF FD D0 C0"), Err(DecodeError::InvalidLayer2Combination));
    }

    #[test]
    fn test_layer2_free_format_always_accepted() {
        for channel_mode in ["00", "40", "80", "C0"] {
            let header = decode(&format!("FF FD 00 {}", channel_mode));
            assert_eq!(header.bitrate(), Bitrate::Free);
            assert!(header.to_string().contains("Bitrate: Free kbps"));
        }
    }

    #[test]
    fn test_layer2_allowed_combinations() {
        // 192 kbps (index 1010) is allowed in every channel mode
        for channel_mode in ["00", "40", "80", "C0"] {
            assert!(decode_hex(&format!("FF FD A0 {}", channel_mode)).is_ok());
        }
        // 32 kbps only for single channel
        assert!(decode_hex("FF FD 10 C0").is_ok());
        assert_eq!(decode_hex("FF FD 10 00"), Err(DecodeError::InvalidLayer2Combination));
        // 384 kbps never for single channel
        assert!(decode_hex("FF FD E0 80").is_ok());
        assert_eq!(decode_hex("FF FD E0 C0"), Err(DecodeError::InvalidLayer2Combination));
    }

    #[test]
    fn test_layer2_joint_stereo_mode_extension() {
        let header = decode("FF FD 80 50");
        assert_eq!(header.mode_extension(), ModeExtension::IntensityBands { first_band: 8 });
    }

    #[test]
    fn test_reserved_emphasis_is_reported() {
        let header = decode("FF FB 90 66");
        assert_eq!(header.emphasis(), Emphasis::Reserved);
        assert!(header.to_string().ends_with("Emphasis: Reserved"));
    }

    #[test]
    fn test_rejection_messages() {
        let cases = [
            ("ABC", "Please enter exactly 4 valid hexadecimal bytes."),
            ("0xFFFB9064", "Please enter exactly 4 valid hexadecimal bytes."),
            ("00 00 00 00", "Invalid sync word. Not a valid MP3 frame header."),
            ("FF EB 90 64", "Invalid version ID. Not a valid MP3 frame header."),
            ("FF F9 90 64", "Invalid layer ID. Not a valid MP3 frame header."),
            ("FF FB F0 64", "Invalid bitrate index. Not a valid MP3 frame header."),
            ("FF FB 9C 64", "Invalid sample rate index. Not a valid MP3 frame header."),
            ("FF FD D0 C0", "Invalid bitrate and channel mode combination for Layer II."),
        ];
        for (input, message) in cases {
            match decode_hex(input) {
                Err(err) => assert_eq!(err.to_string(), message, "input {:?}", input),
                Ok(header) => panic!("{:?} should fail, decoded {:?}", input, header),
            }
        }
    }

    #[test]
    fn test_first_failure_wins() {
        // bad bitrate and reserved sample rate: bitrate is checked first
        assert_eq!(decode_hex("FF FB FC 64"), Err(DecodeError::InvalidBitrate));
        // reserved version and layer: version is checked first
        assert_eq!(decode_hex("FF E9 90 64"), Err(DecodeError::InvalidVersion));
    }

    #[test]
    fn test_every_sample_rate() {
        let cases = [
            ("FF FB 90 64", 44100),
            ("FF FB 94 64", 48000),
            ("FF FB 98 64", 32000),
            ("FF F3 90 64", 22050),
            ("FF F3 94 64", 24000),
            ("FF F3 98 64", 16000),
            ("FF E3 90 64", 11025),
            ("FF E3 94 64", 12000),
            ("FF E3 98 64", 8000),
        ];
        for (input, rate) in cases {
            assert_eq!(decode(input).sample_rate(), rate, "input {:?}", input);
        }
    }

    #[test]
    fn test_every_bitrate_table_row() {
        let tables: [(&str, [u32; 14]); 5] = [
            ("FF FF", [32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448]),
            ("FF FB", [32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320]),
            ("FF F7", [32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256]),
            ("FF F3", [8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160]),
            ("FF E3", [8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160]),
        ];
        for (prefix, rates) in tables {
            for (i, rate) in rates.iter().enumerate() {
                let input = format!("{} {:X}0 64", prefix, i + 1);
                assert_eq!(decode(&input).bitrate(), Bitrate::Kbps(*rate), "input {:?}", input);
            }
        }
    }

    #[test]
    fn test_raw_header_round_trips_through_decoder() {
        let raw: RawHeader = "fffb9064".parse().unwrap();
        assert_eq!(decode_header(raw), decode_hex("FF FB 90 64"));
        assert_eq!(raw.to_string(), "FF FB 90 64");
    }
}
