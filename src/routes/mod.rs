pub mod bingo;
pub mod util;
