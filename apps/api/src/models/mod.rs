pub mod assessment;
pub mod career;
