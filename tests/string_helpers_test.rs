#[cfg(test)]
mod tests {
    use strutil::prelude::*;

    fn printable_ascii() -> String {
        (0x20u8..=0x7e).map(char::from).collect()
    }

    #[test]
    fn test_format_properties() {
        assert_eq!(format(Some(""), &[]), "");
        assert_eq!(format(Some(""), &[&1]), "");
        assert_eq!(format(None, &[]), "");
        assert_eq!(format(None, &[&"x", &2]), "");
        assert_eq!(format(Some("a{}b"), &[]), "a{}b");
        assert_eq!(format(Some("a{}b"), &[&5]), "a5b");
        assert_eq!(format(Some("{}-{}"), &[&1, &2, &3]), "1-2");
        assert_eq!(lenient_format!("{} of {}", "one"), "one of {}");
    }

    #[test]
    fn test_replace_last_properties() {
        assert_eq!(replace_last(None, 'x', 'y'), None);
        assert_eq!(replace_last(Some("banana"), 'a', 'o').as_deref(), Some("banano"));
        assert_eq!(replace_last(Some("abc"), 'z', 'y').as_deref(), Some("abc"));
    }

    #[test]
    fn test_to_binary_properties() {
        assert_eq!(to_binary("", Some("us-ascii"), Some("")).unwrap(), "");
        assert_eq!(to_binary("A", Some("us-ascii"), Some("")).unwrap(), "01000001");
        assert_eq!(
            to_binary("AB", Some("us-ascii"), Some(" ")).unwrap(),
            "01000001 01000010 "
        );
    }

    #[test]
    fn test_binary_round_trip_printable_ascii() {
        let all = printable_ascii();
        for charset in [None, Some("us-ascii"), Some("utf-8"), Some("iso-8859-1")] {
            for separator in [None, Some(""), Some(" "), Some("--")] {
                for ch in all.chars() {
                    let text = ch.to_string();
                    let bits = to_binary(&text, charset, separator).unwrap();
                    assert_eq!(from_binary(&bits, charset, separator).unwrap(), text);
                }

                let bits = to_binary(&all, charset, separator).unwrap();
                let separator_len = separator.map_or(0, str::len);
                assert_eq!(bits.len(), all.len() * (8 + separator_len));
                assert_eq!(from_binary(&bits, charset, separator).unwrap(), all);
            }
        }
    }

    #[test]
    fn test_round_trip_by_hand() {
        // Decode 8-digit groups without the library decoder
        let text = "Hello, World!";
        let bits = to_binary(text, Some("us-ascii"), None).unwrap();
        let bytes: Vec<u8> = bits
            .as_bytes()
            .chunks(8)
            .map(|group| {
                group
                    .iter()
                    .fold(0u8, |byte, digit| (byte << 1) | (digit - b'0'))
            })
            .collect();
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn test_multibyte_round_trip() {
        for (text, charset) in [("日本語", "shift_jis"), ("中文", "gbk"), ("naïve", "utf-16le")] {
            let bits = to_binary(text, Some(charset), Some(" ")).unwrap();
            assert_eq!(from_binary(&bits, Some(charset), Some(" ")).unwrap(), text);
        }
    }

    #[test]
    fn test_single_byte_charsets_with_non_ascii() {
        // US-ASCII writes '?' (0x3f) for anything above U+007F
        assert_eq!(to_binary("é", Some("us-ascii"), None).unwrap(), "00111111");
        assert_eq!(
            to_binary("aé", Some("US-ASCII"), Some(" ")).unwrap(),
            "01100001 00111111 "
        );
        // ISO-8859-1 covers U+0000..U+00FF only
        assert_eq!(to_binary("é", Some("iso-8859-1"), None).unwrap(), "11101001");
        assert_eq!(to_binary("€", Some("iso-8859-1"), None).unwrap(), "00111111");
        // windows-1252 has the euro sign at 0x80
        assert_eq!(to_binary("€", Some("windows-1252"), None).unwrap(), "10000000");

        assert_eq!(Charset::for_name("us-ascii").unwrap().name(), "US-ASCII");
        assert_eq!(Charset::for_name("iso-8859-1").unwrap().name(), "ISO-8859-1");
    }

    #[test]
    fn test_unsupported_charset() {
        let err = to_binary("abc", Some("not-a-charset"), None).unwrap_err();
        assert_eq!(err.error_code(), "E_UNSUPPORTED_CHARSET");
        assert!(matches!(err, Error::UnsupportedCharset(_)));
        assert!(Charset::for_name("not-a-charset").is_err());
    }

    #[test]
    fn test_helpers_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Charset>();
        assert_send_sync::<Error>();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format(Some("thread {}"), &[&i]);
                    to_binary(&text, None, Some(" ")).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().ends_with(' '));
        }
    }
}
