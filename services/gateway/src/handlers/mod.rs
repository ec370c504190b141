pub mod commission;
pub mod rates;
pub mod series;
