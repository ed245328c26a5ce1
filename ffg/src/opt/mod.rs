pub mod budget;
pub mod multi_start;
pub mod order;
pub mod packer;
pub mod score;
pub mod search;
