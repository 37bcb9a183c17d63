pub mod converter;
pub mod selector;
