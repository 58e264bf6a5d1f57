//! Behavior tests for the options ticker codec and builder.
//!
//! These tests pin down the wire format `O:<UNDERLYING><YYMMDD><C|P><STRIKE8>`
//! from the outside: what encodes to what, which strings decode, and which
//! inputs are turned away and why.

use marketwire_core::{
    calendar_date, ContractKind, OptionsTicker, OptionsTickerBuilder, OptionsTickerError, Ticker,
    ValidationError,
};
use rust_decimal::Decimal;
use time::{Date, Month, PrimitiveDateTime, Time};

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid date")
}

fn ticker(underlying: &str, expiration: Date, kind: ContractKind, strike: Decimal) -> OptionsTicker {
    OptionsTicker::new(underlying, expiration, kind, strike).expect("valid ticker")
}

// =============================================================================
// Encoding
// =============================================================================

#[test]
fn when_components_are_valid_ticker_encodes_to_fixed_layout() {
    // Given: well-known listed contracts
    let cases = [
        (
            ticker("SPY", date(2025, Month::December, 19), ContractKind::Call, Decimal::from(650)),
            "O:SPY251219C00650000",
        ),
        (
            ticker("UBER", date(2022, Month::January, 21), ContractKind::Call, Decimal::from(50)),
            "O:UBER220121C00050000",
        ),
        (
            ticker("F", date(2021, Month::November, 19), ContractKind::Put, Decimal::from(14)),
            "O:F211119P00014000",
        ),
        (
            ticker("TSLA", date(2026, Month::January, 16), ContractKind::Put, Decimal::new(2505, 1)),
            "O:TSLA260116P00250500",
        ),
        (
            ticker("X", date(2030, Month::June, 21), ContractKind::Call, Decimal::from(4650)),
            "O:X300621C04650000",
        ),
    ];

    // When / Then: each encodes to the exact upstream string
    for (contract, expected) in cases {
        assert_eq!(contract.encode(), expected);
        assert_eq!(contract.to_string(), expected);
        assert_eq!(String::from(contract), expected);
    }
}

#[test]
fn when_underlying_is_lowercase_it_is_uppercased() {
    let contract = ticker("spy", date(2025, Month::December, 19), ContractKind::Call, Decimal::from(650));

    assert_eq!(contract.underlying(), "SPY");
    assert_eq!(contract.encode(), "O:SPY251219C00650000");
}

#[test]
fn when_strike_has_more_than_three_decimals_it_rounds_half_to_even() {
    let expiration = date(2025, Month::December, 19);

    // 12.3456 -> 12345.6 thousandths -> 12346
    let contract = ticker("SPY", expiration, ContractKind::Call, Decimal::new(123_456, 4));
    assert_eq!(contract.encode(), "O:SPY251219C00012346");

    // Exact midpoints go to the even neighbour.
    let down = ticker("SPY", expiration, ContractKind::Call, Decimal::new(5, 4));
    assert_eq!(down.encode(), "O:SPY251219C00000000");
    let up = ticker("SPY", expiration, ContractKind::Call, Decimal::new(15, 4));
    assert_eq!(up.encode(), "O:SPY251219C00000002");
}

#[test]
fn when_expiration_carries_a_time_it_is_ignored() {
    let with_time = PrimitiveDateTime::new(
        date(2025, Month::December, 19),
        Time::from_hms(16, 0, 0).expect("valid time"),
    );
    let with_offset = with_time.assume_utc();

    let from_primitive =
        OptionsTicker::new("SPY", with_time, ContractKind::Call, Decimal::from(650))
            .expect("valid ticker");
    let from_offset = OptionsTicker::new("SPY", with_offset, ContractKind::Call, Decimal::from(650))
        .expect("valid ticker");

    assert_eq!(from_primitive, from_offset);
    assert_eq!(from_primitive.expiration(), date(2025, Month::December, 19));
}

#[test]
fn when_components_are_invalid_construction_fails() {
    let expiration = date(2025, Month::December, 19);

    let cases = [
        ("", Decimal::from(650), ValidationError::EmptyUnderlying),
        (
            "BRK.B",
            Decimal::from(650),
            ValidationError::UnderlyingInvalidChar { ch: '.', index: 3 },
        ),
        (
            "S P",
            Decimal::from(650),
            ValidationError::UnderlyingInvalidChar { ch: ' ', index: 1 },
        ),
        (
            "SPY",
            Decimal::from(-5),
            ValidationError::NegativeStrike {
                value: Decimal::from(-5),
            },
        ),
        (
            "SPY",
            Decimal::from(100_000),
            ValidationError::StrikeOutOfRange {
                value: Decimal::from(100_000),
            },
        ),
    ];

    for (underlying, strike, expected) in cases {
        let err = OptionsTicker::new(underlying, expiration, ContractKind::Call, strike)
            .expect_err("construction must fail");
        assert_eq!(err, expected, "underlying={underlying:?} strike={strike}");
    }
}

// =============================================================================
// Decoding
// =============================================================================

#[test]
fn when_ticker_is_well_formed_decode_recovers_every_component() {
    let contract = OptionsTicker::parse("O:TSLA260116P00250500").expect("must decode");

    assert_eq!(contract.underlying(), "TSLA");
    assert_eq!(contract.expiration(), date(2026, Month::January, 16));
    assert_eq!(contract.kind(), ContractKind::Put);
    assert!(contract.is_put());
    assert!(!contract.is_call());
    assert_eq!(contract.strike(), Decimal::new(2505, 1));
}

#[test]
fn when_strike_has_leading_zeros_they_are_preserved_on_reencode() {
    let encoded = "O:F211119P00000500";
    let contract = OptionsTicker::parse(encoded).expect("must decode");

    assert_eq!(contract.strike(), Decimal::new(5, 1));
    assert_eq!(contract.encode(), encoded);
}

#[test]
fn when_decoding_then_encoding_the_string_is_unchanged_for_every_century_year() {
    // Given: one contract per two-digit year, 2000 through 2099
    for year in 2000..=2099 {
        let expiration = date(year, Month::March, 17);
        let original = ticker("QQQ", expiration, ContractKind::Call, Decimal::new(401_125, 3));

        // When: it is encoded and decoded again
        let encoded = original.encode();
        let decoded = OptionsTicker::parse(&encoded).expect("encoded ticker must decode");

        // Then: value and string both survive
        assert_eq!(decoded, original, "year {year}");
        assert_eq!(decoded.encode(), encoded, "year {year}");
        assert_eq!(&encoded[5..7], format!("{:02}", year - 2000));
    }
}

#[test]
fn when_input_is_malformed_decode_names_the_reason() {
    let cases = [
        ("SPY251219C00650000", "missing 'O:' prefix"),
        ("o:SPY251219C00650000", "missing 'O:' prefix"),
        ("", "missing 'O:' prefix"),
        ("O:", "missing alphabetic underlying"),
        ("O:251219C00650000", "missing alphabetic underlying"),
        ("O:SPY251219C0065000", "expected 15 characters"),
        ("O:SPY251219C006500000", "expected 15 characters"),
        ("O:SPY1251219C00650000", "expected 15 characters"),
        ("O:SPY25121C00650000", "expected 15 characters"),
        ("O:SPY2512A9C00650000", "six digits"),
        ("O:SPY251219X00650000", "'C' or 'P'"),
        ("O:SPY251219c00650000", "'C' or 'P'"),
        ("O:SPY251219C0065000A", "eight digits"),
        ("O:SPY250230C00650000", "not a valid calendar date"),
        ("O:SPY251300C00650000", "not a valid calendar date"),
    ];

    for (input, expected_reason) in cases {
        let err = OptionsTicker::parse(input).expect_err("malformed ticker must be rejected");
        match &err {
            OptionsTickerError::Format { input: echoed, reason } => {
                assert_eq!(echoed, input);
                assert!(
                    reason.contains(expected_reason),
                    "input {input:?}: reason {reason:?} should mention {expected_reason:?}"
                );
            }
            other => panic!("input {input:?}: unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("O:SPY251219C00650000"), "message carries an example");
        assert!(OptionsTicker::try_parse(input).is_none());
    }
}

#[test]
fn when_trying_a_string_try_parse_returns_the_decoded_ticker_or_nothing() {
    assert_eq!(
        OptionsTicker::try_parse("O:UBER220121C00050000"),
        Some(ticker("UBER", date(2022, Month::January, 21), ContractKind::Call, Decimal::from(50)))
    );
    assert!(OptionsTicker::try_parse("garbage").is_none());
    assert!(OptionsTicker::try_parse("O:SPY25121C00650000").is_none());
}

#[test]
fn when_leap_day_exists_it_decodes_and_when_it_does_not_it_fails() {
    let leap = OptionsTicker::parse("O:SPY240229C00500000").expect("2024 is a leap year");
    assert_eq!(leap.expiration(), date(2024, Month::February, 29));

    assert!(OptionsTicker::try_parse("O:SPY250229C00500000").is_none());
}

#[test]
fn when_underlying_is_lowercase_in_the_string_decode_normalizes_it() {
    let contract = OptionsTicker::parse("O:spy251219C00650000").expect("must decode");
    assert_eq!(contract.encode(), "O:SPY251219C00650000");
}

#[test]
fn str_conversions_share_the_strict_decoder() {
    let parsed: OptionsTicker = "O:SPY251219C00650000".parse().expect("FromStr");
    let converted = OptionsTicker::try_from("O:SPY251219C00650000").expect("TryFrom<&str>");
    let owned = OptionsTicker::try_from(String::from("O:SPY251219C00650000"))
        .expect("TryFrom<String>");

    assert_eq!(parsed, converted);
    assert_eq!(converted, owned);
    assert!(" O:SPY251219C00650000".parse::<OptionsTicker>().is_err());
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn when_builder_is_complete_it_matches_direct_construction() {
    let mut builder = OptionsTicker::builder();
    builder
        .underlying("SPY")
        .expiration_ymd(2025, 12, 19)
        .call()
        .strike(Decimal::from(650));

    let built = builder.build().expect("complete builder");

    assert_eq!(
        built,
        ticker("SPY", date(2025, Month::December, 19), ContractKind::Call, Decimal::from(650))
    );
    assert_eq!(builder.build_string().expect("encodes"), "O:SPY251219C00650000");
}

#[test]
fn when_builder_is_reused_changes_apply_to_the_next_build() {
    let mut builder = OptionsTickerBuilder::new();
    builder
        .underlying("SPY")
        .expiration(date(2025, Month::December, 19))
        .kind(ContractKind::Call)
        .strike(Decimal::from(650));

    let call = builder.build_string().expect("call");
    builder.put().strike(Decimal::from(600));
    let put = builder.build_string().expect("put");

    assert_eq!(call, "O:SPY251219C00650000");
    assert_eq!(put, "O:SPY251219P00600000");
}

#[test]
fn when_builder_is_missing_fields_build_reports_the_first_gap() {
    // Given: no underlying at all
    let err = OptionsTickerBuilder::new().build().expect_err("blank builder");
    assert_eq!(err, ValidationError::EmptyUnderlying);

    // Given: only the underlying
    let mut builder = OptionsTickerBuilder::new();
    builder.underlying("SPY");
    assert_eq!(
        builder.build().expect_err("no expiration"),
        ValidationError::MissingField {
            field: "expiration"
        }
    );

    builder.expiration_ymd(2025, 12, 19);
    assert_eq!(
        builder.build().expect_err("no kind"),
        ValidationError::MissingField { field: "kind" }
    );

    builder.call();
    assert_eq!(
        builder.build().expect_err("no strike"),
        ValidationError::MissingField { field: "strike" }
    );

    builder.strike(Decimal::from(650));
    assert!(builder.build().is_ok());
}

#[test]
fn when_builder_gets_an_impossible_date_build_fails() {
    let mut builder = OptionsTickerBuilder::new();
    builder
        .underlying("SPY")
        .expiration_ymd(2025, 2, 30)
        .call()
        .strike(Decimal::from(650));

    assert_eq!(
        builder.build().expect_err("Feb 30"),
        ValidationError::InvalidDate {
            year: 2025,
            month: 2,
            day: 30
        }
    );
}

#[test]
fn when_builder_is_reset_it_starts_over() {
    let mut builder = OptionsTickerBuilder::new();
    builder
        .underlying("SPY")
        .expiration(calendar_date(2025, 12, 19).expect("valid date"))
        .call()
        .strike(Decimal::from(650));
    assert!(builder.build().is_ok());

    builder.reset();

    assert_eq!(builder, OptionsTickerBuilder::default());
    assert_eq!(builder.build().expect_err("reset"), ValidationError::EmptyUnderlying);
}

// =============================================================================
// Serialization and the shared ticker type
// =============================================================================

#[test]
fn serde_uses_the_encoded_string() {
    let contract = OptionsTicker::parse("O:SPY251219C00650000").expect("must decode");

    let json = serde_json::to_string(&contract).expect("serializes");
    assert_eq!(json, r#""O:SPY251219C00650000""#);

    let back: OptionsTicker = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, contract);

    assert!(serde_json::from_str::<OptionsTicker>(r#""O:SPY251219Q00650000""#).is_err());
}

#[test]
fn generic_ticker_routes_prefixed_values_to_the_options_codec() {
    let option = Ticker::parse("O:SPY251219C00650000").expect("option ticker");
    let stock = Ticker::parse("AAPL").expect("stock symbol");

    assert!(option.is_option());
    assert_eq!(
        option.as_option().map(OptionsTicker::underlying),
        Some("SPY")
    );
    assert!(!stock.is_option());
    assert_eq!(stock.to_string(), "AAPL");

    let err = Ticker::parse("O:SPY2512").expect_err("truncated option");
    assert!(matches!(err, ValidationError::NotAnOptionsTicker { .. }));
}
