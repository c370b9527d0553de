// Career recommendations: scoring every path for a user and storing the results.

pub mod aggregator;
pub mod handlers;
