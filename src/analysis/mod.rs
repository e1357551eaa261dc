pub mod categorizer;
pub mod config;
pub mod dto;
pub mod emotional;
pub mod insights;
pub mod intake;
pub mod patterns;
pub mod recommendations;
pub mod services;
pub mod temporal;

pub use config::AnalysisConfig;
pub use dto::{AnalysisResult, AnalysisStatus};
pub use patterns::{DetectedPattern, PatternKind};
pub use services::DietaryAnalyzer;
