pub mod db;
pub mod translation;
