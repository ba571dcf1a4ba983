#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod allocate;
pub mod channel;
pub mod color_565;
pub mod color_8888;
pub mod cpu_detect;
pub mod morton;
