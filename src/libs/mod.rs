pub mod colored;
