use std::fmt;
use crate::store::enums::store_drivers::StoreDrivers;

impl fmt::Display for StoreDrivers {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreDrivers::memory => f.write_str("memory"),
            StoreDrivers::sqlite3 => f.write_str("sqlite3")
        }
    }
}
