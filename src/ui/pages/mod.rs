pub mod estimator;
pub mod history;
pub mod history_detail;

pub use estimator::EstimatorPage;
pub use history::HistoryPage;
pub use history_detail::HistoryDetailPage;
