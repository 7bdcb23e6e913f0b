pub mod caches;
pub mod upstream;
pub mod use_cases;

pub use caches::Caches;
pub use upstream::build_upstream;
pub use use_cases::UseCases;
