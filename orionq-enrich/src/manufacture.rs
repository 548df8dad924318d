//! Manufacture date from vendor serial numbers.
//!
//! Cisco chassis serials follow `LLLYYWWSSSS`:
//! - `LLL`: manufacturing site
//! - `YY`: years since 1996
//! - `WW`: week of that year (1-53)
//! - `SSSS`: unit identifier
//!
//! The decoded date is the first day of that week, counted in whole weeks
//! from January 1.

use crate::error::{DecodeError, DecodeResult};
use crate::pipeline::RowEnricher;
use crate::{MANUFACTURE_DATE_FIELD, SERIAL_FIELD, VENDOR_FIELD};
use chrono::{Days, NaiveDate};
use orionq_model::ResultRow;
use tracing::debug;

/// Decodes a manufacture date from a serial number.
pub trait SerialDateDecoder: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`DecodeError`] when the serial does not carry a date.
    fn decode(&self, serial: &str) -> DecodeResult<NaiveDate>;
}

/// Decoder for Cisco `LLLYYWWSSSS` serials.
#[derive(Debug, Clone, Copy, Default)]
pub struct CiscoSerialDecoder;

impl CiscoSerialDecoder {
    pub const SERIAL_LEN: usize = 11;
    pub const BASE_YEAR: i32 = 1996;
}

impl SerialDateDecoder for CiscoSerialDecoder {
    fn decode(&self, serial: &str) -> DecodeResult<NaiveDate> {
        let serial = serial.trim();
        if serial.len() != Self::SERIAL_LEN || !serial.is_ascii() {
            return Err(DecodeError::Length {
                expected: Self::SERIAL_LEN,
                actual: serial.chars().count(),
            });
        }

        let years = numeric(&serial[3..5], "year")?;
        let week = numeric(&serial[5..7], "week")?;
        if !(1..=53).contains(&week) {
            return Err(DecodeError::WeekOutOfRange(week));
        }

        let year = Self::BASE_YEAR + years as i32;
        NaiveDate::from_ymd_opt(year, 1, 1)
            .and_then(|jan1| jan1.checked_add_days(Days::new(u64::from(week - 1) * 7)))
            .ok_or(DecodeError::InvalidDate)
    }
}

fn numeric(value: &str, component: &'static str) -> DecodeResult<u32> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::NonNumeric {
            component,
            value: value.to_string(),
        });
    }
    value.parse().map_err(|_| DecodeError::NonNumeric {
        component,
        value: value.to_string(),
    })
}

/// Adds `ManufactureDate` to Cisco rows with a decodable serial.
#[derive(Debug, Clone, Default)]
pub struct ManufactureDateEnricher<D = CiscoSerialDecoder> {
    decoder: D,
}

impl ManufactureDateEnricher {
    /// Enricher backed by [`CiscoSerialDecoder`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            decoder: CiscoSerialDecoder,
        }
    }
}

impl<D: SerialDateDecoder> ManufactureDateEnricher<D> {
    /// Uses a custom decoder.
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }
}

impl<D: SerialDateDecoder> RowEnricher for ManufactureDateEnricher<D> {
    fn name(&self) -> &'static str {
        "manufacture-date"
    }

    fn output_field(&self) -> &'static str {
        MANUFACTURE_DATE_FIELD
    }

    fn enrich(&self, row: &mut ResultRow) -> bool {
        let is_cisco = row
            .get_str(VENDOR_FIELD)
            .is_some_and(|v| v.to_ascii_lowercase().contains("cisco"));
        if !is_cisco {
            return false;
        }
        let Some(serial) = row.get_str(SERIAL_FIELD).filter(|s| !s.trim().is_empty()) else {
            return false;
        };

        match self.decoder.decode(serial) {
            Ok(date) => row.insert_if_absent(MANUFACTURE_DATE_FIELD, date.to_string()),
            Err(e) => {
                debug!(serial = %serial, "Skipping manufacture date: {}", e);
                false
            }
        }
    }
}
