//! Command-line mode selection.

use lota_core::buffer::BufferPolicy;

/// Usage message printed on unrecognized arguments.
pub const USAGE: &str = "Usage: lota [-b]\n\n  -b    reuse buffered release listings when present\n";

/// Parsed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Run the catalog with the given buffer policy.
    Run(BufferPolicy),
    /// Unrecognized arguments: print usage and exit non-zero.
    Usage,
}

/// Interpret raw arguments (without the program name).
pub fn parse_args(args: &[String]) -> Invocation {
    match args {
        [] => Invocation::Run(BufferPolicy::Disabled),
        [flag] if flag == "-b" => Invocation::Run(BufferPolicy::Enabled),
        _ => Invocation::Usage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_without_buffering() {
        assert_eq!(
            parse_args(&[]),
            Invocation::Run(BufferPolicy::Disabled)
        );
    }

    #[test]
    fn dash_b_enables_buffering() {
        assert_eq!(
            parse_args(&strings(&["-b"])),
            Invocation::Run(BufferPolicy::Enabled)
        );
    }

    #[test]
    fn anything_else_is_a_usage_error() {
        assert_eq!(parse_args(&strings(&["-x"])), Invocation::Usage);
        assert_eq!(parse_args(&strings(&["-b", "extra"])), Invocation::Usage);
        assert_eq!(parse_args(&strings(&["build"])), Invocation::Usage);
    }
}
