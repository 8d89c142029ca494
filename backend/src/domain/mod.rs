//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed catalogue values and the use-case that
//! reads them, independent of HTTP and storage.
//!
//! Public surface:
//! - `Jeep`, `JeepModel`, `TrimLevel`, `JeepQuery` — catalogue values.
//! - `Error`, `ErrorCode` — transport agnostic failures.
//! - `TraceId` — request correlation identifier.
//! - `JeepSalesService` — implementation of the catalogue query port.

pub mod error;
pub mod jeep;
pub mod jeep_sales_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::jeep::{
    Jeep, JeepDraft, JeepModel, JeepQuery, JeepValidationError, TRIM_MAX_LENGTH, TrimLevel,
};
pub use self::jeep_sales_service::JeepSalesService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
