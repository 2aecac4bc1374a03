pub mod csv_table;
pub mod decode;

pub use csv_table::parse_records;
pub use decode::decode_lossy;
