#![allow(dead_code)]

pub mod episode;
