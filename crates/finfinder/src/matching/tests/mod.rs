mod common;
mod intake;
mod scoring;
mod service;
