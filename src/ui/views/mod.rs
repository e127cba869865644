pub mod form;
pub mod history;
pub mod vehicles;
