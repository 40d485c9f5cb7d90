pub mod wws;
