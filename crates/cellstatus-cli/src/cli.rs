//! CLI argument definitions using clap.

use clap::Parser;

/// Keyword selecting every known site.
pub const ALL_SITES: &str = "ALL_SITES";

/// Cellular module status report for SD-WAN edge devices
#[derive(Parser, Debug)]
#[command(name = "cellstatus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source site name, or the keyword ALL_SITES for every site
    #[arg(short = 'S', long, default_value = ALL_SITES)]
    pub site_name: String,

    /// Target the QA (tprod) controller environment: "true" or "false"
    #[arg(short = 'T', long, default_value = "false", value_parser = parse_switch, action = clap::ArgAction::Set)]
    pub tprod: bool,
}

/// Boolean-like switch parser: case-insensitive "true"/"false" only.
///
/// Any other value is rejected before any network activity happens.
fn parse_switch(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(format!("invalid switch '{}', expected true or false", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cellstatus"]).unwrap();
        assert_eq!(cli.site_name, ALL_SITES);
        assert!(!cli.tprod);
    }

    #[test]
    fn test_site_name_short_flag() {
        let cli = Cli::try_parse_from(["cellstatus", "-S", "Branch West"]).unwrap();
        assert_eq!(cli.site_name, "Branch West");
    }

    #[test]
    fn test_tprod_accepts_case_insensitive_booleans() {
        for value in ["true", "True", "TRUE"] {
            let cli = Cli::try_parse_from(["cellstatus", "--tprod", value]).unwrap();
            assert!(cli.tprod);
        }
        for value in ["false", "False", "FALSE"] {
            let cli = Cli::try_parse_from(["cellstatus", "--tprod", value]).unwrap();
            assert!(!cli.tprod);
        }
    }

    #[test]
    fn test_tprod_rejects_other_values() {
        assert!(Cli::try_parse_from(["cellstatus", "--tprod", "yes"]).is_err());
        assert!(Cli::try_parse_from(["cellstatus", "-T", "1"]).is_err());
    }
}
