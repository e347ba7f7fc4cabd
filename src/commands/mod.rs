pub mod check;
pub mod export;
pub mod print;
pub mod view;
