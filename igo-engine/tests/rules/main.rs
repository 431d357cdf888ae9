mod common;

mod invariants;
mod passing;
mod scoring;
