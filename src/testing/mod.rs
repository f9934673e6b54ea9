mod series;

pub use series::ar1_series;
