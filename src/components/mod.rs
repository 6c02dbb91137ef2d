pub mod auth_forms;
pub mod message_toast;
pub mod nav_bar;
pub mod review_dialog;
pub mod review_filters;
pub mod review_form;
pub mod reviews_list;
