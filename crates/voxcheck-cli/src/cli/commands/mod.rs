mod check;
mod checksum;
mod list;

pub use check::run_check;
pub use checksum::run_checksum;
pub use list::run_list;
