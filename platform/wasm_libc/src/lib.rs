#![no_std]
#![allow(non_camel_case_types)]

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("only 32bit and 64bit pointer widths are supported");

pub mod bits_stdint;
pub mod stdint;
pub mod table;
