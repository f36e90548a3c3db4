pub mod consts;
pub mod games;
pub mod interface;
pub mod sweeper;
