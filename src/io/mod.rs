pub mod churn;
pub mod output;
pub mod scanner;
