pub mod errors;
pub mod db;
pub mod admin;
pub mod product;
pub mod printable_item;
pub mod printable_inventory;
pub mod printable_transaction;
pub mod report;
pub mod task;

#[cfg(test)]
mod tests;
