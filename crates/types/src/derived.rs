//! Logical types layered over a physical representation.
//!
//! Each one shares comparison and adjacency with its physical table and only
//! overrides what differs: the name, debug rendering, bounds or virtuality.

use {
    crate::{
        escape::utf8_safe_c_escape,
        primitive::Primitive,
        traits::{self, DataTypeTraits},
    },
    chrono::NaiveDate,
    def::DataType,
};

fn append_quoted_text(cell: &[u8], out: &mut String) {
    out.push('"');
    utf8_safe_c_escape(cell, out);
    out.push('"');
}

/// UTF-8 text stored as binary. Named for `DataType::String`.
pub struct Str;

impl DataTypeTraits for Str {
    type Physical = traits::Binary;

    const TYPE: DataType = DataType::String;
    const NAME: &'static str = "string";

    fn append_debug_string(cell: &[u8], out: &mut String) {
        append_quoted_text(cell, out)
    }
}

pub struct Varchar;

impl DataTypeTraits for Varchar {
    type Physical = traits::Binary;

    const TYPE: DataType = DataType::Varchar;
    const NAME: &'static str = "varchar";

    fn append_debug_string(cell: &[u8], out: &mut String) {
        append_quoted_text(cell, out)
    }
}

/// Microseconds since the unix epoch.
pub struct UnixtimeMicros;

impl UnixtimeMicros {
    pub const MICROS_PER_SECOND: i64 = 1_000_000;
}

impl DataTypeTraits for UnixtimeMicros {
    type Physical = traits::Int64;

    const TYPE: DataType = DataType::UnixtimeMicros;
    const NAME: &'static str = "unixtime_micros";

    /// Renders `YYYY-MM-DDTHH:MM:SS.ffffffZ` in UTC over the whole `i64`
    /// range, with a leading `-` for years before year 0.
    fn append_debug_string(cell: &[u8], out: &mut String) {
        let micros = i64::load(cell);
        let secs = micros.div_euclid(Self::MICROS_PER_SECOND);
        let fraction = micros.rem_euclid(Self::MICROS_PER_SECOND);

        let (year, month, day) = civil_from_days(secs.div_euclid(SECONDS_PER_DAY));
        let seconds_of_day = secs.rem_euclid(SECONDS_PER_DAY);

        if year < 0 {
            out.push('-');
        }
        out.push_str(&format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
            year.unsigned_abs(),
            month,
            day,
            seconds_of_day / 3600,
            seconds_of_day % 3600 / 60,
            seconds_of_day % 60,
            fraction
        ));
    }
}

const SECONDS_PER_DAY: i64 = 86_400;

/// Proleptic Gregorian `(year, month, day)` of a day count relative to
/// 1970-01-01. Year 0 exists, so 1 BCE is year 0.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    // Shift to eras of 400 years starting on 0000-03-01.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);

    (year, month, day)
}

/// Days since the unix epoch, limited to years 1 through 9999.
pub struct Date;

impl Date {
    /// 0001-01-01
    pub const MIN_VALUE: i32 = -719_162;
    /// 9999-12-31
    pub const MAX_VALUE: i32 = 2_932_896;

    const EPOCH_DAYS_FROM_CE: i32 = 719_163;

    pub const fn is_valid_value(days: i32) -> bool {
        days >= Self::MIN_VALUE && days <= Self::MAX_VALUE
    }
}

impl DataTypeTraits for Date {
    type Physical = traits::Int32;

    const TYPE: DataType = DataType::Date;
    const NAME: &'static str = "date";

    fn append_debug_string(cell: &[u8], out: &mut String) {
        let days = i32::load(cell);

        let date = Self::is_valid_value(days)
            .then(|| NaiveDate::from_num_days_from_ce_opt(days + Self::EPOCH_DAYS_FROM_CE))
            .flatten();

        match date {
            Some(date) => out.push_str(&date.format("%Y-%m-%d").to_string()),
            None => out.push_str(&format!("value {} out of range", days)),
        }
    }

    fn min_value() -> &'static [u8] {
        static MIN: [u8; 4] = Date::MIN_VALUE.to_ne_bytes();
        &MIN
    }

    fn max_value() -> Option<&'static [u8]> {
        static MAX: [u8; 4] = Date::MAX_VALUE.to_ne_bytes();
        Some(&MAX)
    }
}

// Scale and precision live in the schema, so decimals render as their raw
// backing integer tagged with the backing width.
macro_rules! decimal_traits {
    ($($marker:ident($physical:ident, $suffix:literal),)*) => {
        $(
            pub struct $marker;

            impl DataTypeTraits for $marker {
                type Physical = traits::$physical;

                const TYPE: DataType = DataType::$marker;
                const NAME: &'static str = "decimal";

                fn append_debug_string(cell: &[u8], out: &mut String) {
                    traits::$physical::append_debug_string(cell, out);
                    out.push_str($suffix);
                }
            }
        )*
    };
}

decimal_traits! {
    Decimal32(Int32, "_D32"),
    Decimal64(Int64, "_D64"),
    Decimal128(Int128, "_D128"),
}

/// Projection-only marker for deleted rows.
pub struct IsDeleted;

impl DataTypeTraits for IsDeleted {
    type Physical = traits::Bool;

    const TYPE: DataType = DataType::IsDeleted;
    const NAME: &'static str = "is_deleted";
    const IS_VIRTUAL: bool = true;
}

#[cfg(test)]
mod tests {
    use {super::*, bytemuck::bytes_of, core::cmp::Ordering};

    fn debug<T: DataTypeTraits>(cell: &[u8]) -> String {
        let mut out = String::new();
        T::append_debug_string(cell, &mut out);
        out
    }

    #[test]
    fn inherits_physical_layout() {
        assert_eq!(Str::SIZE, traits::Binary::SIZE);
        assert_eq!(Date::SIZE, 4);
        assert_eq!(UnixtimeMicros::SIZE, 8);
        assert_eq!(Decimal128::SIZE, 16);
        assert_eq!(IsDeleted::SIZE, 1);
        assert!(IsDeleted::IS_VIRTUAL);
        assert!(!Str::IS_VIRTUAL);
    }

    #[test]
    fn inherits_physical_order() {
        assert_eq!(Str::compare(b"a", b"b"), Ordering::Less);
        assert!(Varchar::are_consecutive(b"x", b"x\0"));
        assert!(Decimal64::are_consecutive(bytes_of(&99i64), bytes_of(&100i64)));
        assert!(UnixtimeMicros::max_value().is_some());
        assert!(Str::max_value().is_none());
    }

    #[test]
    fn string_debug() {
        assert_eq!(debug::<Str>(b"hello"), "\"hello\"");
        assert_eq!(debug::<Varchar>(b"a\"b\n"), "\"a\\\"b\\n\"");
    }

    #[test]
    fn timestamp_debug() {
        assert_eq!(debug::<UnixtimeMicros>(bytes_of(&0i64)), "1970-01-01T00:00:00.000000Z");
        assert_eq!(debug::<UnixtimeMicros>(bytes_of(&-1i64)), "1969-12-31T23:59:59.999999Z");
        assert_eq!(
            debug::<UnixtimeMicros>(bytes_of(&-1_500_000i64)),
            "1969-12-31T23:59:58.500000Z"
        );
        assert_eq!(
            debug::<UnixtimeMicros>(bytes_of(&1_234_567_890_123_456i64)),
            "2009-02-13T23:31:30.123456Z"
        );
    }

    #[test]
    fn timestamp_debug_full_range() {
        assert_eq!(
            debug::<UnixtimeMicros>(UnixtimeMicros::min_value()),
            "-290308-12-21T19:59:05.224192Z"
        );
        assert_eq!(
            debug::<UnixtimeMicros>(UnixtimeMicros::max_value().unwrap()),
            "294247-01-10T04:00:54.775807Z"
        );
        assert_eq!(
            debug::<UnixtimeMicros>(bytes_of(&253_402_300_800_000_000i64)),
            "10000-01-01T00:00:00.000000Z"
        );
        assert_eq!(
            debug::<UnixtimeMicros>(bytes_of(&-62_135_596_800_000_000i64)),
            "0001-01-01T00:00:00.000000Z"
        );
        assert_eq!(
            debug::<UnixtimeMicros>(bytes_of(&-62_135_596_800_000_001i64)),
            "0000-12-31T23:59:59.999999Z"
        );
    }

    #[test]
    fn civil_dates() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(i64::from(Date::MAX_VALUE)), (9999, 12, 31));
        assert_eq!(civil_from_days(i64::from(Date::MIN_VALUE)), (1, 1, 1));
    }

    #[test]
    fn date_bounds() {
        assert_eq!(i32::load(Date::min_value()), Date::MIN_VALUE);
        assert_eq!(i32::load(Date::max_value().unwrap()), Date::MAX_VALUE);
        assert!(Date::is_valid_value(0));
        assert!(Date::is_valid_value(Date::MIN_VALUE));
        assert!(Date::is_valid_value(Date::MAX_VALUE));
        assert!(!Date::is_valid_value(-1_000_000));
        assert!(!Date::is_valid_value(Date::MAX_VALUE + 1));
    }

    #[test]
    fn date_debug() {
        assert_eq!(debug::<Date>(bytes_of(&0i32)), "1970-01-01");
        assert_eq!(debug::<Date>(bytes_of(&Date::MIN_VALUE)), "0001-01-01");
        assert_eq!(debug::<Date>(bytes_of(&Date::MAX_VALUE)), "9999-12-31");
        assert_eq!(debug::<Date>(bytes_of(&-1_000_000i32)), "value -1000000 out of range");
        assert_eq!(
            debug::<Date>(bytes_of(&i32::MAX)),
            format!("value {} out of range", i32::MAX)
        );
    }

    #[test]
    fn decimal_debug() {
        assert_eq!(debug::<Decimal32>(bytes_of(&123i32)), "123_D32");
        assert_eq!(debug::<Decimal64>(bytes_of(&-5i64)), "-5_D64");
        assert_eq!(
            debug::<Decimal128>(bytes_of(&(1i128 << 100))),
            format!("{}_D128", 1i128 << 100)
        );
    }
}
