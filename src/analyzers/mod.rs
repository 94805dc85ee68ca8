pub mod change_analyzer;

pub use change_analyzer::ChangeAnalyzer;
