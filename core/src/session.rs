//! Run-wide state shared by every generator.

use serde::{Deserialize, Serialize};

use crate::distribution::Distributions;
use crate::error::{GenError, GenResult};
use crate::scaling::Scaling;
use crate::table::Table;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_scale")]
    pub scale: i64,
    /// Generate only this table, leaving out child tables that would
    /// otherwise ride along with their parent.
    #[serde(default)]
    pub table: Option<String>,
    #[serde(default = "default_chunk")]
    pub chunk: i64,
    #[serde(default = "default_chunk")]
    pub chunk_count: i64,
}

fn default_scale() -> i64 {
    1
}

fn default_chunk() -> i64 {
    1
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { scale: default_scale(), table: None, chunk: default_chunk(), chunk_count: default_chunk() }
    }
}

pub struct Session {
    scaling: Scaling,
    distributions: Distributions,
    only_table: Option<Table>,
    chunk: i64,
    chunk_count: i64,
}

impl Session {
    pub fn new(config: &SessionConfig) -> GenResult<Self> {
        let scaling = Scaling::new(config.scale)?;
        let only_table = match &config.table {
            Some(name) => Some(Table::from_name(name)?),
            None => None,
        };
        if config.chunk_count < 1 || config.chunk < 1 || config.chunk > config.chunk_count {
            return Err(GenError::Config {
                message: format!(
                    "chunk {} of {} is out of range",
                    config.chunk, config.chunk_count
                ),
            });
        }
        Ok(Self {
            scaling,
            distributions: Distributions::new(),
            only_table,
            chunk: config.chunk,
            chunk_count: config.chunk_count,
        })
    }

    pub fn with_scale(scale: i64) -> GenResult<Self> {
        Session::new(&SessionConfig { scale, ..SessionConfig::default() })
    }

    pub fn scaling(&self) -> &Scaling {
        &self.scaling
    }

    pub fn distributions(&self) -> &Distributions {
        &self.distributions
    }

    pub fn only_table(&self) -> Option<Table> {
        self.only_table
    }

    /// First and last row (inclusive, 1-based) of this session's chunk
    /// of the given table. Earlier chunks absorb the remainder rows.
    pub fn row_range(&self, table: Table) -> (i64, i64) {
        let total = self.scaling.row_count(table);
        let base = total / self.chunk_count;
        let extra = total % self.chunk_count;
        let this_chunk = base + if self.chunk <= extra { 1 } else { 0 };
        let preceding = base * (self.chunk - 1) + extra.min(self.chunk - 1);
        let first = preceding + 1;
        (first, preceding + this_chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_tile_the_table_exactly() {
        let total = Scaling::new(1).expect("scale 1").row_count(Table::Promotion);
        let mut covered = 0;
        for chunk in 1..=7 {
            let config = SessionConfig { chunk, chunk_count: 7, ..SessionConfig::default() };
            let session = Session::new(&config).expect("session");
            let (first, last) = session.row_range(Table::Promotion);
            assert_eq!(first, covered + 1);
            covered = last;
        }
        assert_eq!(covered, total);
    }

    #[test]
    fn chunk_bounds_are_validated() {
        let config = SessionConfig { chunk: 3, chunk_count: 2, ..SessionConfig::default() };
        assert!(Session::new(&config).is_err());
    }
}
