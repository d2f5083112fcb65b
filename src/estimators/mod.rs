pub mod approaches;
pub mod information_storage;
pub mod mutual_information;
pub mod traits;
pub mod utils;

pub use traits::{
    DiscreteInformationEstimator, GlobalValue, OptionalLocalValues, SignificanceTest,
};
