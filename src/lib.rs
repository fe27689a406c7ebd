pub mod digest;
pub mod enzyme;
pub mod errors;
pub mod report;
mod runner;
pub mod seq;

use crate::errors::DigestError;

pub fn run() -> Result<(), DigestError> {
    runner::run()
}
