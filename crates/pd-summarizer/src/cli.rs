//! Positional argument handling for the `plan-digest` binary.

use std::path::PathBuf;

/// Printed to stdout when the argument count is wrong.
pub const USAGE: &str = "Usage: plan-digest <plan_file> <output_file> <aws_region>";

/// The three positional arguments, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub plan_file: PathBuf,
    pub output_file: PathBuf,
    pub aws_region: String,
}

impl Invocation {
    /// Parse arguments (program name already skipped). `None` unless there are exactly three.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let plan_file = args.next()?;
        let output_file = args.next()?;
        let aws_region = args.next()?;
        if args.next().is_some() {
            return None;
        }
        Some(Self {
            plan_file: PathBuf::from(plan_file),
            output_file: PathBuf::from(output_file),
            aws_region,
        })
    }
}
