use thiserror::Error;

use super::config::ConfigError;
use crate::core::field::model::ModelError;
use crate::core::io::report::ReportError;
use crate::core::io::table::TableError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Coordinate table error: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Charge model error: {source}")]
    Model {
        #[from]
        source: ModelError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Report writing failed: {source}")]
    Report {
        #[from]
        source: ReportError,
    },
}
