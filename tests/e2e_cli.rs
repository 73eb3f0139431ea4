//! End-to-end tests of the `tavily` binary. None of these reach the real API:
//! they either stop before the network or point at a closed local port.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Nothing listens on the discard port, so a request here fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9";

fn tavily() -> Command {
    let mut cmd = cargo_bin_cmd!("tavily");
    cmd.env("TAVILY_API_URL", UNREACHABLE_API);
    cmd
}

mod help {
    use super::*;

    #[test]
    fn test_main_help_lists_subcommands() {
        let mut assert = tavily().arg("--help").assert().success();
        for needle in ["Tavily CLI", "search", "extract", "crawl", "map", "usage"] {
            assert = assert.stdout(predicate::str::contains(needle));
        }
    }

    #[test]
    fn test_search_help() {
        tavily()
            .args(["search", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Execute a web search query"))
            .stdout(predicate::str::contains("--depth"))
            .stdout(predicate::str::contains("--topic"));
    }

    #[test]
    fn test_subcommand_help() {
        for (command, needle) in [
            ("extract", "Extract content"),
            ("crawl", "Crawl a website"),
            ("map", "Generate a site map"),
            ("usage", "usage statistics"),
        ] {
            tavily()
                .args([command, "--help"])
                .assert()
                .success()
                .stdout(predicate::str::contains(needle));
        }
    }

    #[test]
    fn test_help_needs_no_api_key() {
        tavily()
            .env("TAVILY_API_KEY", "")
            .args(["crawl", "--help"])
            .assert()
            .success();
    }

    #[test]
    fn test_version() {
        tavily()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod failures {
    use super::*;

    #[test]
    fn test_no_api_key_error() {
        tavily()
            .env("TAVILY_API_KEY", "")
            .args(["search", "test"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("No API key provided"))
            .stderr(predicate::str::contains("TAVILY_API_KEY"));
    }

    #[test]
    fn test_out_of_range_max_results_is_a_usage_error() {
        tavily()
            .args(["-k", "test-key", "search", "test", "-n", "25"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--max-results"));
    }

    #[test]
    fn test_zero_crawl_depth_is_a_usage_error() {
        tavily()
            .args(["-k", "test-key", "crawl", "https://x.test", "--max-depth", "0"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--max-depth"));
    }

    #[test]
    fn test_unknown_subcommand() {
        tavily()
            .args(["-k", "test-key", "scrape"])
            .assert()
            .code(2);
    }

    #[test]
    fn test_unreachable_api_is_a_transport_error() {
        tavily()
            .args(["-k", "test-key", "usage"])
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("request to the Tavily API failed"));
    }

    #[test]
    fn test_verbose_keeps_error_classification() {
        tavily()
            .args(["-v", "-k", "test-key", "map", "https://x.test"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("sending request"));
    }

    #[test]
    fn test_piped_diagnostics_have_no_escape_codes() {
        tavily()
            .args(["-v", "-k", "test-key", "usage"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("sending request"))
            .stderr(predicate::str::contains("\u{1b}[").not());
    }
}
