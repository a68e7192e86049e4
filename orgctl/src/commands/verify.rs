//! Verify command - check a candidate password against a stored hash.

use domain::Admission;

use crate::cli::VerifyArgs;

/// Returns whether the candidate matches. A malformed hash is a mismatch.
pub fn execute(args: VerifyArgs, admission: &Admission) -> bool {
    let matched = admission.verify_credential(&args.hash, &args.password);
    tracing::info!(matched, "Credential checked");
    matched
}
