//! Buffer refresh policy.
//!
//! The decision of what to do with buffered release listings is pure;
//! the interactive confirmation itself belongs to the CLI.

/// Buffering mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferPolicy {
    /// Always re-fetch; any existing buffer is cleared up front.
    Disabled,
    /// Reuse buffered listings; ask before refreshing when data exists.
    Enabled,
}

/// What to do with the on-disk buffer before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshDecision {
    /// Clear the buffer without asking.
    Clear,
    /// Ask the user whether to clear.
    Confirm,
    /// Keep the buffer as-is.
    Keep,
}

/// Decide how to treat buffered listings given the selected policy and
/// whether any buffered data exists.
pub fn refresh_decision(has_buffered: bool, policy: BufferPolicy) -> RefreshDecision {
    match policy {
        BufferPolicy::Disabled => RefreshDecision::Clear,
        BufferPolicy::Enabled if has_buffered => RefreshDecision::Confirm,
        BufferPolicy::Enabled => RefreshDecision::Keep,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_policy_always_clears() {
        assert_eq!(
            refresh_decision(true, BufferPolicy::Disabled),
            RefreshDecision::Clear
        );
        assert_eq!(
            refresh_decision(false, BufferPolicy::Disabled),
            RefreshDecision::Clear
        );
    }

    #[test]
    fn enabled_policy_confirms_when_data_exists() {
        assert_eq!(
            refresh_decision(true, BufferPolicy::Enabled),
            RefreshDecision::Confirm
        );
    }

    #[test]
    fn enabled_policy_keeps_empty_buffer() {
        assert_eq!(
            refresh_decision(false, BufferPolicy::Enabled),
            RefreshDecision::Keep
        );
    }
}
