//! Static table metadata: scaling curves, null behavior, history
//! flags and parent/child wiring.
//!
//! RULE: the numbers in this file are part of the output contract.
//! Changing a tier array, a null mask or a basis-point value changes
//! published datasets, so treat every edit here as a format break.

use crate::error::{GenError, GenResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    CustomerAddress,
    CustomerDemographics,
    DateDim,
    HouseholdDemographics,
    IncomeBand,
    Inventory,
    Item,
    Promotion,
    Reason,
    ShipMode,
    TimeDim,
    Warehouse,
    WebReturns,
    WebSales,
    // Join targets only; no row generator is wired for these.
    Customer,
    WebPage,
    WebSite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalingModel {
    Static,
    Linear,
    Logarithmic,
}

pub struct ScalingInfo {
    pub multiplier: i32,
    pub model: ScalingModel,
    pub row_counts_per_scale: [i64; 10],
}

impl Table {
    pub const ALL: [Table; 17] = [
        Table::CustomerAddress,
        Table::CustomerDemographics,
        Table::DateDim,
        Table::HouseholdDemographics,
        Table::IncomeBand,
        Table::Inventory,
        Table::Item,
        Table::Promotion,
        Table::Reason,
        Table::ShipMode,
        Table::TimeDim,
        Table::Warehouse,
        Table::WebReturns,
        Table::WebSales,
        Table::Customer,
        Table::WebPage,
        Table::WebSite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::CustomerAddress => "customer_address",
            Table::CustomerDemographics => "customer_demographics",
            Table::DateDim => "date_dim",
            Table::HouseholdDemographics => "household_demographics",
            Table::IncomeBand => "income_band",
            Table::Inventory => "inventory",
            Table::Item => "item",
            Table::Promotion => "promotion",
            Table::Reason => "reason",
            Table::ShipMode => "ship_mode",
            Table::TimeDim => "time_dim",
            Table::Warehouse => "warehouse",
            Table::WebReturns => "web_returns",
            Table::WebSales => "web_sales",
            Table::Customer => "customer",
            Table::WebPage => "web_page",
            Table::WebSite => "web_site",
        }
    }

    pub fn from_name(name: &str) -> GenResult<Table> {
        Table::ALL
            .iter()
            .copied()
            .find(|table| table.name() == name.to_lowercase())
            .ok_or_else(|| GenError::UnknownTable { name: name.to_string() })
    }

    pub fn keeps_history(&self) -> bool {
        matches!(self, Table::Item | Table::WebPage | Table::WebSite)
    }

    pub fn is_small(&self) -> bool {
        matches!(self, Table::Warehouse | Table::WebSite)
    }

    pub fn is_date_based(&self) -> bool {
        matches!(self, Table::Inventory | Table::WebSales)
    }

    pub fn has_row_generator(&self) -> bool {
        !matches!(self, Table::Customer | Table::WebPage | Table::WebSite)
    }

    pub fn parent(&self) -> Option<Table> {
        match self {
            Table::WebReturns => Some(Table::WebSales),
            _ => None,
        }
    }

    pub fn child(&self) -> Option<Table> {
        match self {
            Table::WebSales => Some(Table::WebReturns),
            _ => None,
        }
    }

    /// Probability, in hundredths of a percent, that a row of this
    /// table carries any nulls at all.
    pub fn null_basis_points(&self) -> i32 {
        match self {
            Table::CustomerAddress => 600,
            Table::CustomerDemographics => 0,
            Table::DateDim => 0,
            Table::HouseholdDemographics => 0,
            Table::IncomeBand => 0,
            Table::Inventory => 1000,
            Table::Item => 50,
            Table::Promotion => 200,
            Table::Reason => 0,
            Table::ShipMode => 0,
            Table::TimeDim => 0,
            Table::Warehouse => 200,
            Table::WebReturns => 900,
            Table::WebSales => 5,
            Table::Customer => 700,
            Table::WebPage => 250,
            Table::WebSite => 100,
        }
    }

    /// Bit n set means output column n may never be nulled.
    pub fn not_null_bitmap(&self) -> i64 {
        match self {
            Table::CustomerAddress => 0x3,
            Table::CustomerDemographics => 0x1,
            Table::DateDim => 0x3,
            Table::HouseholdDemographics => 0x1,
            Table::IncomeBand => 0x1,
            Table::Inventory => 0x7,
            Table::Item => 0xB,
            Table::Promotion => 0x3,
            Table::Reason => 0x3,
            Table::ShipMode => 0x3,
            Table::TimeDim => 0x3,
            Table::Warehouse => 0x3,
            Table::WebReturns => 0x2004,
            Table::WebSales => 0x20008,
            Table::Customer => 0x13,
            Table::WebPage => 0xB,
            Table::WebSite => 0xB,
        }
    }

    pub fn scaling_info(&self) -> &'static ScalingInfo {
        match self {
            Table::CustomerAddress => &CUSTOMER_ADDRESS_SCALING,
            Table::CustomerDemographics => &CUSTOMER_DEMOGRAPHICS_SCALING,
            Table::DateDim => &DATE_DIM_SCALING,
            Table::HouseholdDemographics => &HOUSEHOLD_DEMOGRAPHICS_SCALING,
            Table::IncomeBand => &INCOME_BAND_SCALING,
            Table::Inventory => &INVENTORY_SCALING,
            Table::Item => &ITEM_SCALING,
            Table::Promotion => &PROMOTION_SCALING,
            Table::Reason => &REASON_SCALING,
            Table::ShipMode => &SHIP_MODE_SCALING,
            Table::TimeDim => &TIME_DIM_SCALING,
            Table::Warehouse => &WAREHOUSE_SCALING,
            Table::WebReturns => &WEB_RETURNS_SCALING,
            Table::WebSales => &WEB_SALES_SCALING,
            Table::Customer => &CUSTOMER_SCALING,
            Table::WebPage => &WEB_PAGE_SCALING,
            Table::WebSite => &WEB_SITE_SCALING,
        }
    }

    /// Stable per-table index used to stagger history window offsets.
    pub fn history_offset_index(&self) -> i64 {
        match self {
            Table::Item => 0,
            Table::WebPage => 1,
            Table::WebSite => 2,
            _ => 0,
        }
    }
}

const fn static_rows(value: i64) -> [i64; 10] {
    [0, value, value, value, value, value, value, value, value, value]
}

const CUSTOMER_ADDRESS_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 3,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 50, 250, 1000, 2500, 6000, 15000, 32500, 40000, 50000],
};

const CUSTOMER_DEMOGRAPHICS_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 2,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(19208),
};

const DATE_DIM_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(73049),
};

const HOUSEHOLD_DEMOGRAPHICS_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(7200),
};

const INCOME_BAND_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(20),
};

// Derived from item and warehouse counts; the tier array is a
// placeholder.
const INVENTORY_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0; 10],
};

const ITEM_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 3,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 9, 51, 102, 132, 150, 180, 201, 231, 251],
};

const PROMOTION_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 300, 500, 1000, 1300, 1500, 1800, 2000, 2300, 2500],
};

const REASON_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 35, 45, 55, 60, 65, 67, 70, 72, 75],
};

const SHIP_MODE_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(20),
};

const TIME_DIM_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Static,
    row_counts_per_scale: static_rows(86400),
};

const WAREHOUSE_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 5, 10, 15, 17, 20, 22, 25, 27, 30],
};

const WEB_RETURNS_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 3,
    model: ScalingModel::Linear,
    row_counts_per_scale: [0, 60, 600, 6000, 18000, 60000, 180000, 600000, 1800000, 6000000],
};

const WEB_SALES_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 3,
    model: ScalingModel::Linear,
    row_counts_per_scale: [0, 60, 600, 6000, 18000, 60000, 180000, 600000, 1800000, 6000000],
};

const CUSTOMER_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 3,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 100, 500, 2000, 5000, 12000, 30000, 65000, 80000, 100000],
};

const WEB_PAGE_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 30, 100, 1020, 1302, 1500, 1800, 2001, 2301, 2502],
};

const WEB_SITE_SCALING: ScalingInfo = ScalingInfo {
    multiplier: 0,
    model: ScalingModel::Logarithmic,
    row_counts_per_scale: [0, 15, 21, 12, 21, 27, 33, 39, 42, 48],
};
