mod args;
mod config;

pub use args::{AnalyzeArgs, Args, Command, InitArgs};
pub use config::{AnalysisConfig, DomainSource};
