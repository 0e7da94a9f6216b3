#![allow(dead_code)]

pub mod stores;
