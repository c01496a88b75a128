//! The generation engine: drives one table's generator over a row
//! range and hands finished rows to a sink.
//!
//! RULES:
//!   - Rows are produced strictly in row number order.
//!   - All randomness flows through each generator's StreamBank.
//!   - finish_row runs exactly once per logical row, on every
//!     generator involved, so chunked runs line up with sequential
//!     runs.
//!   - A child table is driven over its PARENT's row range; the child
//!     never draws a row number of its own.

use log::debug;

use crate::customer_address_generator::CustomerAddressRowGenerator;
use crate::customer_demographics_generator::CustomerDemographicsRowGenerator;
use crate::date_dim_generator::DateDimRowGenerator;
use crate::error::{GenError, GenResult};
use crate::generator::RowGenerator;
use crate::household_demographics_generator::HouseholdDemographicsRowGenerator;
use crate::income_band_generator::IncomeBandRowGenerator;
use crate::inventory_generator::InventoryRowGenerator;
use crate::item_generator::ItemRowGenerator;
use crate::promotion_generator::PromotionRowGenerator;
use crate::reason_generator::ReasonRowGenerator;
use crate::row::TableRow;
use crate::session::Session;
use crate::ship_mode_generator::ShipModeRowGenerator;
use crate::table::Table;
use crate::time_dim_generator::TimeDimRowGenerator;
use crate::warehouse_generator::WarehouseRowGenerator;
use crate::web_returns_generator::WebReturnsRowGenerator;
use crate::web_sales_generator::WebSalesRowGenerator;

pub fn build_generator(table: Table) -> GenResult<Box<dyn RowGenerator>> {
    let generator: Box<dyn RowGenerator> = match table {
        Table::CustomerAddress => Box::new(CustomerAddressRowGenerator::new()),
        Table::CustomerDemographics => Box::new(CustomerDemographicsRowGenerator::new()),
        Table::DateDim => Box::new(DateDimRowGenerator::new()),
        Table::HouseholdDemographics => Box::new(HouseholdDemographicsRowGenerator::new()),
        Table::IncomeBand => Box::new(IncomeBandRowGenerator::new()),
        Table::Inventory => Box::new(InventoryRowGenerator::new()),
        Table::Item => Box::new(ItemRowGenerator::new()),
        Table::Promotion => Box::new(PromotionRowGenerator::new()),
        Table::Reason => Box::new(ReasonRowGenerator::new()),
        Table::ShipMode => Box::new(ShipModeRowGenerator::new()),
        Table::TimeDim => Box::new(TimeDimRowGenerator::new()),
        Table::Warehouse => Box::new(WarehouseRowGenerator::new()),
        Table::WebReturns => Box::new(WebReturnsRowGenerator::new()),
        Table::WebSales => Box::new(WebSalesRowGenerator::new()),
        Table::Customer | Table::WebPage | Table::WebSite => {
            return Err(GenError::MetadataOnlyTable { name: table.name().to_string() })
        }
    };
    Ok(generator)
}

pub struct GenerationEngine<'a> {
    session: &'a Session,
}

impl<'a> GenerationEngine<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Generate this session's chunk of `table`, passing every row to
    /// the sink. Generating a parent table also yields its child rows;
    /// the sink dispatches on `row.table()`.
    pub fn generate_table(
        &self,
        table: Table,
        sink: &mut dyn FnMut(Box<dyn TableRow>) -> GenResult<()>,
    ) -> GenResult<()> {
        let mut driver = build_generator(table)?;
        // The companion is the other half of a parent/child pair.
        let mut companion: Option<Box<dyn RowGenerator>> = match (table.parent(), table.child()) {
            (Some(parent), _) => Some(build_generator(parent)?),
            (_, Some(child)) if self.session.only_table() != Some(table) => {
                Some(build_generator(child)?)
            }
            _ => None,
        };

        let range_table = table.parent().unwrap_or(table);
        let (first, last) = self.session.row_range(range_table);
        debug!(
            "generating {} rows {}..={} (driven by {})",
            table.name(),
            first,
            last,
            range_table.name()
        );

        self.position_at(first, table, driver.as_mut())?;
        if first > 1 {
            if let Some(companion) = companion.as_deref_mut() {
                companion.skip_rows(first - 1);
            }
        }

        for row_number in first..=last {
            loop {
                let result = match table.parent() {
                    Some(_) => {
                        let parent = companion
                            .as_deref_mut()
                            .ok_or_else(|| anyhow::anyhow!("parent generator missing"))?;
                        driver.generate_row_and_child_rows(
                            row_number,
                            self.session,
                            Some(parent),
                            None,
                        )?
                    }
                    None => driver.generate_row_and_child_rows(
                        row_number,
                        self.session,
                        None,
                        companion.as_deref_mut(),
                    )?,
                };
                for row in result.rows {
                    sink(row)?;
                }
                if result.ends_row {
                    break;
                }
            }
            driver.finish_row();
            if let Some(companion) = companion.as_deref_mut() {
                companion.finish_row();
            }
        }
        Ok(())
    }

    /// Collect the chunk into memory. Intended for small tables and
    /// tests; fact tables should stream through a sink instead.
    pub fn collect_rows(&self, table: Table) -> GenResult<Vec<Box<dyn TableRow>>> {
        let mut rows = Vec::new();
        self.generate_table(table, &mut |row| {
            rows.push(row);
            Ok(())
        })?;
        Ok(rows)
    }

    /// Move the driver to its first row. History-keeping generators
    /// rebuild their carry-over state by generating and discarding the
    /// row just before the chunk boundary.
    fn position_at(
        &self,
        first: i64,
        table: Table,
        driver: &mut dyn RowGenerator,
    ) -> GenResult<()> {
        if first <= 1 {
            return Ok(());
        }
        if table.keeps_history() {
            driver.skip_rows(first - 2);
            driver.generate_row_and_child_rows(first - 1, self.session, None, None)?;
            driver.finish_row();
        } else {
            driver.skip_rows(first - 1);
        }
        Ok(())
    }
}
