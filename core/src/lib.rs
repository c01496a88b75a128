//! Deterministic synthetic retail dataset generator.
//!
//! Produces the web sales channel of a star schema warehouse: the
//! shared dimensions, the slowly changing item dimension, weekly
//! inventory snapshots, and the web sales / web returns fact pair.
//! Output is a pure function of (scale factor, table, row range), so
//! any chunk of any table can be generated independently on any
//! machine and the pieces always agree.

pub mod address;
pub mod business_key;
pub mod dates;
pub mod decimal;
pub mod distribution;
pub mod engine;
pub mod error;
pub mod generator;
pub mod join_key;
pub mod nulls;
pub mod permutations;
pub mod pricing;
pub mod rng;
pub mod row;
pub mod scaling;
pub mod scd;
pub mod session;
pub mod table;
pub mod types;
pub mod value_generator;

pub mod customer_address_generator;
pub mod customer_demographics_generator;
pub mod date_dim_generator;
pub mod household_demographics_generator;
pub mod income_band_generator;
pub mod inventory_generator;
pub mod item_generator;
pub mod promotion_generator;
pub mod reason_generator;
pub mod ship_mode_generator;
pub mod time_dim_generator;
pub mod warehouse_generator;
pub mod web_returns_generator;
pub mod web_sales_generator;

pub use engine::{build_generator, GenerationEngine};
pub use error::{GenError, GenResult};
pub use row::TableRow;
pub use scaling::Scaling;
pub use session::{Session, SessionConfig};
pub use table::Table;
