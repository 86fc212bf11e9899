//! Library side of the `sales-analytics` command line.

pub mod generate;
pub mod logging;
pub mod pipeline;
