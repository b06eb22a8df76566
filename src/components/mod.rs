pub mod chat_widget;
pub mod mode_selector;
