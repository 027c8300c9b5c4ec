pub mod period_finder;
