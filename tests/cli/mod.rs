pub mod support;

mod config;
mod logging;
mod paper;
mod recommend;
mod trends;
