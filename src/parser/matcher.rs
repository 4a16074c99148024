//! Line matchers for `perf trace` output.
//!
//! Each trace line starts with a decimal timestamp in seconds, followed by
//! free-form event text, as produced by
//! `perf script -F trace:time,event,sym,trace`.
//!
//! The two matchers are independent: each takes one line and returns the
//! line's timestamp if it is the event being looked for.

use regex::Regex;
use std::sync::LazyLock;

/// Process finished `exec` (start of the measured interval)
static START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+).*sys_exit_exec").expect("start pattern is valid")
});

/// Process entered `write` on fd 1, as decimal or hex with any leading zeros.
/// The descriptor must end at a non-digit (or end of line) so 10, 0x100 etc.
/// never match.
static WRITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.\d+).*sys_enter_write.*fd: (?:0[xX])?0*1(?:\D|$)")
        .expect("write pattern is valid")
});

/// Timestamp of an exec-completion line, if `line` is one
pub fn match_start(line: &str) -> Option<f64> {
    capture_timestamp(&START, line)
}

/// Timestamp of a write-to-stdout line, if `line` is one
pub fn match_write(line: &str) -> Option<f64> {
    capture_timestamp(&WRITE, line)
}

/// Parse the leading timestamp captured by `pattern`
///
/// **Private** - shared by both matchers
fn capture_timestamp(pattern: &Regex, line: &str) -> Option<f64> {
    let caps = pattern.captures(line)?;
    caps.get(1)?.as_str().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_start() {
        let line = "12.345678 ( 0.000 ms): hello/4242 syscalls:sys_exit_execve(0x0)";
        assert_eq!(match_start(line), Some(12.345678));
    }

    #[test]
    fn test_match_start_requires_leading_timestamp() {
        assert_eq!(match_start("hello sys_exit_execve 1.0"), None);
        assert_eq!(match_start(" 1.000000 sys_exit_execve"), None);
        assert_eq!(match_start("1 sys_exit_execve"), None);
    }

    #[test]
    fn test_match_start_long_timestamp_still_parses() {
        let line = "123456789012345678901234567890.5 sys_exit_execve";
        assert!(match_start(line).is_some_and(f64::is_finite));
    }

    #[test]
    fn test_match_start_ignores_other_events() {
        assert_eq!(match_start("1.000000 syscalls:sys_enter_execve"), None);
    }

    #[test]
    fn test_match_write_decimal_and_hex() {
        for fd in ["1", "01", "0x1", "0X0001", "0x01"] {
            let line = format!("2.500000 syscalls:sys_enter_write fd: {}, buf: 0x7ff", fd);
            assert_eq!(match_write(&line), Some(2.5), "fd {}", fd);
        }
    }

    #[test]
    fn test_match_write_rejects_other_descriptors() {
        for fd in ["10", "0x100", "2", "0x2", "11", "100"] {
            let line = format!("2.500000 syscalls:sys_enter_write fd: {}, buf: 0x7ff", fd);
            assert_eq!(match_write(&line), None, "fd {}", fd);
        }
    }

    #[test]
    fn test_match_write_descriptor_at_end_of_line() {
        assert_eq!(match_write("3.000000 syscalls:sys_enter_write fd: 1"), Some(3.0));
    }

    #[test]
    fn test_match_write_ignores_exit_events() {
        assert_eq!(match_write("3.000000 syscalls:sys_exit_write fd: 1,"), None);
    }
}
