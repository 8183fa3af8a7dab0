pub mod breakdown;
pub mod response;
pub mod roadmap;
pub mod suggestion;
