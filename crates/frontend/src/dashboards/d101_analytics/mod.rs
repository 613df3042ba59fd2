pub mod ui;

pub use ui::dashboard::AnalyticsDashboard;
