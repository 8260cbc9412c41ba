//! Gate outcome and its mapping to exit codes and output channels.

/// Result of evaluating the release gate.
///
/// The checks never terminate the process themselves; they produce an
/// `Outcome` and the binary performs the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Deployment may proceed. Silent, exit 0.
    Pass,
    /// Deployment is intentionally skipped. `INFO:` message to stdout, exit 2.
    Skip(String),
    /// A required precondition failed. `ERROR:` message to stderr, exit 1.
    Fail(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Pass => 0,
            Outcome::Fail(_) => 1,
            Outcome::Skip(_) => 2,
        }
    }

    /// Write the outcome message to its channel. Pass is silent.
    ///
    /// Skips go to stdout: the pipeline reads exit 2 as "skip this stage",
    /// not as a failure, so the message must not land on stderr.
    pub fn report(&self) {
        match self {
            Outcome::Pass => {}
            Outcome::Skip(reason) => println!("INFO: {}", reason),
            Outcome::Fail(reason) => eprintln!("ERROR: {}", reason),
        }
    }

    /// Check if the outcome allows deployment.
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}
