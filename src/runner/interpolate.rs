//! Variable interpolation for strings
//!
//! This module replaces `$NAME` tokens with variable values. Values may
//! reference other variables and are expanded recursively.

use crate::error::{InterpolationError, InterpolationResult};
use crate::runner::Variables;

/// Maximum number of nested value expansions before giving up
pub const MAX_RESOLUTION_DEPTH: usize = 32;

/// Interpolate `$NAME` tokens in a string
///
/// For every known variable whose token occurs in `s`, the variable's value is
/// resolved first and then substituted for every occurrence of the token.
/// Matching is plain substring matching: `$FOO` also matches the start of
/// `$FOOD` when `FOOD` is not itself a variable. Unknown tokens are left as-is.
pub fn interpolate(s: &str, vars: &Variables) -> InterpolationResult<String> {
    interpolate_at_depth(s, vars, 0)
}

fn interpolate_at_depth(s: &str, vars: &Variables, depth: usize) -> InterpolationResult<String> {
    let mut result = s.to_string();

    for name in vars.names() {
        let token = format!("${}", name);
        if !result.contains(&token) {
            continue;
        }

        if depth >= MAX_RESOLUTION_DEPTH {
            return Err(InterpolationError::DepthExceeded {
                variable: name.to_string(),
                limit: MAX_RESOLUTION_DEPTH,
            });
        }

        let value = vars.get(name).unwrap_or_default();
        let resolved = interpolate_at_depth(value, vars, depth + 1)?;
        result = result.replace(&token, &resolved);
    }

    Ok(result)
}
