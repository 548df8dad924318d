//! Best-effort row enrichment for OrionQ.
//!
//! After rows come back from the information service, an
//! [`EnrichmentPipeline`] runs each enabled [`RowEnricher`] over every row:
//! - [`ManufactureDateEnricher`] decodes the build date from Cisco chassis serials
//! - [`FirmwareBuildDateEnricher`] pulls the `DD-MMM-YY` compile date from
//!   the node description
//!
//! Enrichers only add fields. A row that cannot be enriched is left exactly
//! as it was; nothing here ever fails a query.

mod error;
mod firmware;
mod manufacture;
mod pipeline;

pub use error::{DecodeError, DecodeResult};
pub use firmware::{find_build_date, FirmwareBuildDateEnricher};
pub use manufacture::{CiscoSerialDecoder, ManufactureDateEnricher, SerialDateDecoder};
pub use pipeline::{derived_date, EnrichmentOptions, EnrichmentPipeline, RowEnricher};

/// Row field holding the vendor name.
pub const VENDOR_FIELD: &str = "Vendor";
/// Row field holding the chassis serial number.
pub const SERIAL_FIELD: &str = "Serial";
/// Row field holding the free-text system description.
pub const DESCRIPTION_FIELD: &str = "NodeDescription";
/// Added by [`ManufactureDateEnricher`].
pub const MANUFACTURE_DATE_FIELD: &str = "ManufactureDate";
/// Added by [`FirmwareBuildDateEnricher`].
pub const FIRMWARE_BUILD_DATE_FIELD: &str = "FirmwareBuildDate";
