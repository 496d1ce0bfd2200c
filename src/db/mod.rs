pub mod db;
pub mod migrations;

pub use db::init_db;
