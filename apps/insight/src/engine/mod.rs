pub mod report;
pub mod roadmap;
pub mod scale;
pub mod severity;
pub mod suggestions;
pub mod tips;
