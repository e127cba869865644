pub mod check_card;
pub mod form_errors;
pub mod header;
pub mod toast;
