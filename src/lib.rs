pub mod cipher;
pub mod error;
pub mod key;
pub mod table;
pub mod text;

pub use cipher::{decrypt, encrypt};
pub use error::Error;
pub use key::{expand_key, Key};
pub use table::{build_table, Table, ALPHABET_SIZE, TABLE};
pub use text::normalize;
