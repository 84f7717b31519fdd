mod common;
mod filtering;
mod ranking;
