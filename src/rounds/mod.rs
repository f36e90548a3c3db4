pub mod consts;
pub mod countdown;
pub mod driver;
pub mod handlers;
pub mod models;
