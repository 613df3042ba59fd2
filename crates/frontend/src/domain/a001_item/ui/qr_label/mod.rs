pub mod widget;

pub use widget::LabelDialog;
