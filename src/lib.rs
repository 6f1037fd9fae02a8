pub mod algos;
pub mod core;
pub mod format;
pub mod games;
