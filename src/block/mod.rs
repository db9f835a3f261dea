pub mod des;
