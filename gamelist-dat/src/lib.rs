pub mod dat;
pub mod error;

pub use dat::{DatFile, DatGame, parse_dat, parse_dat_file};
pub use error::DatError;
