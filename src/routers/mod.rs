pub mod constants;
pub mod one_inch;
