use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "mcshell")]
#[command(about = "Order a meal from your shell and get the bill.")]
#[command(version)]
pub struct CommandLine {
    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Use a numbered prompt instead of the arrow-key list
    #[arg(long)]
    pub plain: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let args = CommandLine::try_parse_from(["mcshell"]).unwrap();
        assert!(!args.no_color);
        assert!(!args.plain);
    }

    #[test]
    fn test_flags() {
        let args = CommandLine::try_parse_from(["mcshell", "--plain", "--no-color"]).unwrap();
        assert!(args.no_color);
        assert!(args.plain);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(CommandLine::try_parse_from(["mcshell", "--fast"]).is_err());
    }
}
