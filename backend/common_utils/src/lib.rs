//! Common utilities for the payment gateway

pub mod consts;
pub mod errors;
pub mod ext_traits;
pub mod request;
pub mod types;

pub use errors::{CustomResult, ParsingError, ValidationError};
pub use request::{Method, Request, RequestBuilder, RequestContent};
pub use types::StringWholeUnit;

/// Generate an identifier of the form `{prefix}_{YYYYMMDDHHmmss}_{6 random digits}`.
///
/// The random part comes from the thread-local generator, so concurrent callers never
/// share state.
pub fn generate_id_with_prefix(prefix: &str) -> String {
    use rand::Rng;

    let timestamp =
        date_time::format_date(date_time::now(), date_time::DateFormat::YYYYMMDDHHmmss)
            .unwrap_or_default();
    let random: u32 = rand::thread_rng().gen_range(0..consts::ID_RANDOM_SUFFIX_UPPER_BOUND);
    format!("{prefix}_{timestamp}_{random:06}")
}

/// A fresh key for the provider's `Idempotency-Key` header.
#[inline]
pub fn generate_idempotency_key() -> String {
    generate_id_with_prefix(consts::IDEMPOTENCY_KEY_PREFIX)
}

pub mod date_time {
    use time::{
        format_description::BorrowedFormatItem,
        macros::{format_description, offset},
        OffsetDateTime, UtcOffset,
    };

    /// Offset every provider-facing timestamp is rendered in, whatever the host's zone.
    pub const PROVIDER_UTC_OFFSET: UtcOffset = offset!(+8);

    /// Enum to represent date formats
    #[derive(Debug)]
    pub enum DateFormat {
        /// Format the date in 20191105081132 format
        YYYYMMDDHHmmss,
        /// Format the date in 2019-11-05T08:11:32+08:00 format
        YYYYMMDDTHHmmssOffset,
    }

    /// Current instant in UTC.
    pub fn now() -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    pub fn format_date(
        date: OffsetDateTime,
        format: DateFormat,
    ) -> Result<String, time::error::Format> {
        let format = <&[BorrowedFormatItem<'_>]>::from(format);
        date.format(&format)
    }

    /// Render `instant` the way the provider expects it in `DateTime` headers and
    /// transaction timestamps: shifted to [`PROVIDER_UTC_OFFSET`] with the offset spelled out.
    pub fn provider_timestamp(instant: OffsetDateTime) -> Result<String, time::error::Format> {
        format_date(
            instant.to_offset(PROVIDER_UTC_OFFSET),
            DateFormat::YYYYMMDDTHHmmssOffset,
        )
    }

    impl From<DateFormat> for &[BorrowedFormatItem<'_>] {
        fn from(format: DateFormat) -> Self {
            match format {
                DateFormat::YYYYMMDDHHmmss => format_description!("[year repr:full][month padding:zero repr:numerical][day padding:zero][hour padding:zero repr:24][minute padding:zero][second padding:zero]"),
                DateFormat::YYYYMMDDTHHmmssOffset => format_description!("[year repr:full]-[month padding:zero repr:numerical]-[day padding:zero]T[hour padding:zero repr:24]:[minute padding:zero]:[second padding:zero][offset_hour sign:mandatory padding:zero]:[offset_minute padding:zero]"),
            }
        }
    }
}
