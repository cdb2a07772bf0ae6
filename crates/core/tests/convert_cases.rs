use baseconvert_core::{convert, convert_detailed, BitWidth, ConvertError, SignForm, TargetBase};

fn run(literal: &str, base: u32, bits: u32) -> String {
    let width = BitWidth::new(bits).expect("non-zero width");
    convert(literal, width, base).unwrap_or_else(|err| panic!("{literal} -> base {base}: {err}"))
}

#[test]
fn sign_prefixed_binary_literal() {
    assert_eq!(run("-0b11111111", 2, 8), "11111111");
    assert_eq!(run("-0b11111111", 10, 8), "-1");
    assert_eq!(run("-0b11111111", 16, 8), "FF");
}

#[test]
fn sign_prefixed_hex_literal() {
    assert_eq!(run("-0xFF", 2, 8), "11111111");
    assert_eq!(run("-0xFF", 10, 8), "-1");
    assert_eq!(run("-0xFF", 16, 8), "FF");
}

#[test]
fn sign_prefix_without_top_bit_stays_positive() {
    assert_eq!(run("-0x7F", 10, 8), "127");
    assert_eq!(run("-0xFF", 10, 16), "00255");
}

#[test]
fn unsigned_literals_in_every_base() {
    for literal in ["0b11111111", "255", "0xFF", "0o377"] {
        assert_eq!(run(literal, 2, 8), "11111111", "{literal}");
        assert_eq!(run(literal, 8, 8), "377", "{literal}");
        assert_eq!(run(literal, 10, 8), "255", "{literal}");
        assert_eq!(run(literal, 16, 8), "FF", "{literal}");
    }
}

#[test]
fn plain_negative_decimal_wraps_to_bit_pattern() {
    assert_eq!(run("-1", 2, 8), "11111111");
    assert_eq!(run("-1", 16, 8), "FF");
    assert_eq!(run("-1", 16, 32), "FFFFFFFF");
    // Only the `-0<radix>` form is rendered as a negative decimal.
    assert_eq!(run("-1", 10, 8), "255");
}

#[test]
fn zero_literals_pad_to_width() {
    assert_eq!(run("0", 2, 8), "00000000");
    assert_eq!(run("-0", 2, 4), "0000");
    assert_eq!(run("0", 16, 32), "00000000");
    assert_eq!(run("-0", 10, 8), "00");
}

#[test]
fn underscore_separators_are_no_ops() {
    for base in [2, 8, 10, 16] {
        assert_eq!(run("1_000", base, 16), run("1000", base, 16));
    }
    assert_eq!(run("1_000", 16, 16), "03E8");
}

#[test]
fn binary_output_is_always_exactly_width() {
    for bits in [1, 3, 8, 13, 32, 64] {
        for literal in ["0", "1", "-1", "0x1FF", "-0b1", "123456789012345678901234567890"] {
            let out = run(literal, 2, bits);
            assert_eq!(out.len(), bits as usize, "{literal} at {bits} bits gave {out}");
        }
    }
    assert_eq!(run("123456789012345678901234567890", 2, 8), "11010010");
}

#[test]
fn hex_output_is_width_over_four_and_uppercase() {
    for bits in [4, 8, 16, 32, 64, 128] {
        for literal in ["0", "10", "-1", "0xabc", "-0xdead_beef"] {
            let out = run(literal, 16, bits);
            assert_eq!(out.len(), bits as usize / 4, "{literal} at {bits} bits gave {out}");
            assert!(!out.chars().any(|c| c.is_ascii_lowercase()), "lowercase in {out}");
        }
    }
}

#[test]
fn octal_target_is_supported() {
    assert_eq!(run("8", 8, 12), "0010");
    assert_eq!(run("-1", 8, 6), "77");
}

#[test]
fn signed_values_round_trip_through_decimal() {
    for bits in [4u32, 8, 12] {
        let modulus = 1i64 << bits;
        for v in -(modulus / 2)..modulus {
            let literal = if v < 0 {
                format!("-0x{:X}", v + modulus)
            } else {
                format!("0x{v:X}")
            };
            let out = run(&literal, 10, bits);
            let back: i64 = out.parse().unwrap_or_else(|_| panic!("not a number: {out}"));
            assert_eq!(back, v, "{literal} at {bits} bits gave {out}");
        }
    }
}

#[test]
fn unsigned_bit_pattern_round_trips_through_binary() {
    for v in 0u32..256 {
        let out = run(&v.to_string(), 2, 8);
        assert_eq!(u32::from_str_radix(&out, 2).unwrap(), v);
        let back = run(&format!("0b{out}"), 10, 8);
        assert_eq!(back.parse::<u32>().unwrap(), v);
    }
}

#[test]
fn invalid_digit_fails_with_parse_error() {
    let err = convert("0b102", BitWidth::new(8).unwrap(), 2).unwrap_err();
    assert!(matches!(err, ConvertError::Parse { radix: 2, .. }), "unexpected error: {err}");
    assert!(err.to_string().contains("0b102"), "unexpected message: {err}");
}

#[test]
fn unsupported_base_fails_before_parsing() {
    let err = convert("0b102", BitWidth::new(8).unwrap(), 3).unwrap_err();
    assert!(matches!(err, ConvertError::UnsupportedBase { base: 3 }), "unexpected error: {err}");
    assert!(err.to_string().contains("Unsupported base 3"));
}

#[test]
fn detailed_conversion_reports_every_stage() {
    let report = convert_detailed("-0xF_F", BitWidth::new(8).unwrap(), 10).unwrap();
    assert_eq!(report.literal, "-0xF_F");
    assert_eq!(report.base, TargetBase::Decimal);
    assert_eq!(report.bit_width.get(), 8);
    assert_eq!(report.sign, SignForm::PrefixSigned);
    assert_eq!(report.source_radix, 16);
    assert_eq!(report.parsed, "255");
    assert!(report.normalized);
    assert_eq!(report.wrapped, "255");
    assert_eq!(report.output, "-1");
}

#[test]
fn detailed_conversion_serializes_to_json() {
    let report = convert_detailed("-1", BitWidth::new(32).unwrap(), 16).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["base"], "hexadecimal");
    assert_eq!(json["bit_width"], 32);
    assert_eq!(json["sign"], "plain-signed");
    assert_eq!(json["parsed"], "-1");
    assert_eq!(json["wrapped"], "4294967295");
    assert_eq!(json["output"], "FFFFFFFF");
}
