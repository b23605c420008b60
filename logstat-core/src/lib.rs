pub mod analysis;
pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod logging;
pub mod record;
pub mod stats;
