pub mod conllx;
pub mod error;
pub mod pos_sample;
pub mod stream;
pub mod utility;
