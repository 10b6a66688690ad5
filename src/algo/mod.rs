pub mod analyze;
pub mod cooccur;
pub mod corpus;
pub mod hierarchy;
pub mod quality;
pub mod recommend;
pub mod similar;
pub mod stats;
