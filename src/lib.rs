pub mod analyzers;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;

pub use analyzers::aggregate::{summarize_grades, summarize_reader};
pub use analyzers::correlate::{correlate, correlate_records, correlate_to_path};
pub use analyzers::markets::{count_markets, count_markets_str};
pub use config::{CorrelateOptions, CsvOptions, JoinPolicy};
pub use error::PipelineError;
