#![allow(dead_code)]

pub mod backend;
pub mod coteg_env;
