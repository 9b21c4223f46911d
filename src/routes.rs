pub mod health;
pub mod simple1;
pub mod simple5;
