use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{debug, info, warn};
use odometer::Odometer;
use odometer::odometer::constants::{DEFAULT_MAXIMUM, DEFAULT_MINIMUM};
use odometer::utils::{
    FORMAT_PLACEHOLDER, apply_format, contains_prohibited, digits_to_chars, digits_to_numbers,
    validate_char_bounds, validate_format, validate_length,
};
use std::io::{self, Write};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Odometer - Enumerate bounded digit combinations with carry
#[derive(Parser, Debug)]
#[command(name = "odometer")]
#[command(about = "Enumerate every combination of bounded digits in odometer order")]
#[command(version)]
pub struct CliArgs {
    /// Number of digits in each combination
    pub length: usize,

    /// Smallest digit value (inclusive)
    #[arg(long, default_value_t = DEFAULT_MINIMUM, allow_negative_numbers = true)]
    pub minimum: i64,

    /// Digit bound (exclusive)
    #[arg(long, default_value_t = DEFAULT_MAXIMUM, allow_negative_numbers = true)]
    pub maximum: i64,

    /// Comma separated initial digits (default: all digits at the minimum)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub start: Option<Vec<i64>>,

    /// Leave carried digits at their overflowed value instead of resetting them
    #[arg(long)]
    pub no_reset: bool,

    /// Render digits as characters instead of numbers
    #[arg(long)]
    pub chars: bool,

    /// Output template; every {fuzzed_string} is replaced by the combination
    #[arg(long, default_value = FORMAT_PLACEHOLDER)]
    pub format: String,

    /// Comma separated characters; lines containing any of them are skipped
    #[arg(long, value_delimiter = ',')]
    pub prohibit: Vec<char>,

    /// Stop after printing this many lines
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print only the number of combinations produced
    #[arg(long)]
    pub count: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
#[derive(Debug)]
pub struct CliConfig {
    pub length: usize,
    pub minimum: i64,
    pub maximum: i64,
    pub start: Option<Vec<i64>>,
    pub reset: bool,
    pub chars: bool,
    pub format: String,
    pub prohibit: Vec<char>,
    pub limit: Option<usize>,
    pub count: bool,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Validate parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        validate_length(args.length).context("Invalid digit count")?;
        validate_format(&args.format).context("Invalid output format")?;
        if args.chars {
            validate_char_bounds(args.minimum, args.maximum)
                .context("Bounds cannot be rendered as characters")?;
            // Carried digits grow past the maximum when they are not reset
            if args.no_reset {
                bail!("Character output requires carried digits to be reset");
            }
        }
        if let Some(start) = &args.start
            && start.len() != args.length
        {
            bail!(
                "Initial digits have length {}, expected {}",
                start.len(),
                args.length
            );
        }

        Ok(CliConfig {
            length: args.length,
            minimum: args.minimum,
            maximum: args.maximum,
            start: args.start,
            reset: !args.no_reset,
            chars: args.chars,
            format: args.format,
            prohibit: args.prohibit,
            limit: args.limit,
            count: args.count,
            log_level: args.log_level,
        })
    }

    pub fn build_odometer(&self) -> Result<Odometer> {
        let odometer = match &self.start {
            Some(digits) => Odometer::new(digits.clone(), self.minimum, self.maximum, self.reset),
            None => Odometer::with_length(self.length, self.minimum, self.maximum, self.reset),
        };
        odometer.context("Invalid odometer configuration")
    }

    pub fn render_line(&self, snapshot: &[i64]) -> Result<String> {
        let fuzzed = if self.chars {
            digits_to_chars(snapshot).context("Combination cannot be rendered as characters")?
        } else {
            digits_to_numbers(snapshot)
        };
        Ok(apply_format(&self.format, &fuzzed))
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Drive the odometer until it is exhausted or the limit is reached,
/// writing one line per combination. Returns the number of lines written.
pub fn emit<W: Write>(config: &CliConfig, out: &mut W) -> Result<usize> {
    let mut odometer = config.build_odometer()?;

    if config.count {
        let total = odometer.by_ref().count();
        writeln!(out, "{}", total).context("Failed to write output")?;
        return Ok(total);
    }

    let mut printed = 0;
    while config.limit.is_none_or(|limit| printed < limit) {
        let Ok(snapshot) = odometer.next_combination() else {
            debug!("Odometer exhausted after {} lines", printed);
            break;
        };
        let line = config.render_line(snapshot)?;
        if contains_prohibited(&line, &config.prohibit) {
            debug!("Skipping prohibited combination '{}'", line);
            continue;
        }
        writeln!(out, "{}", line).context("Failed to write output")?;
        printed += 1;
    }

    Ok(printed)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!(
        "Enumerating {} digits in [{}, {}) (reset={})",
        config.length, config.minimum, config.maximum, config.reset
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let printed = emit(&config, &mut out)?;
    if printed == 0 {
        warn!("No combinations produced");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(length: usize, minimum: i64, maximum: i64) -> CliArgs {
        CliArgs {
            length,
            minimum,
            maximum,
            start: None,
            no_reset: false,
            chars: false,
            format: FORMAT_PLACEHOLDER.to_string(),
            prohibit: Vec::new(),
            limit: None,
            count: false,
            log_level: LogLevel::Warn,
        }
    }

    fn output(args: CliArgs) -> Vec<String> {
        let config = CliConfig::from_args(args).unwrap_or_else(|e| panic!("{e}"));
        let mut out = Vec::new();
        let result = emit(&config, &mut out);
        assert!(result.is_ok());
        String::from_utf8(out)
            .unwrap_or_else(|e| panic!("{e}"))
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_emit_binary_digits() {
        assert_eq!(output(args(2, 0, 2)), vec!["0 1", "1 0", "1 1"]);
    }

    #[test]
    fn test_emit_respects_limit() {
        let mut a = args(3, 0, 10);
        a.limit = Some(4);
        assert_eq!(output(a), vec!["0 0 1", "0 0 2", "0 0 3", "0 0 4"]);
    }

    #[test]
    fn test_emit_count() {
        let mut a = args(3, 0, 4);
        a.count = true;
        assert_eq!(output(a), vec!["63"]);
    }

    #[test]
    fn test_emit_chars_with_format_and_prohibit() {
        let mut a = args(1, 97, 101);
        a.chars = true;
        a.format = "<{fuzzed_string}>".to_string();
        a.prohibit = vec!['c'];
        assert_eq!(output(a), vec!["<b>", "<d>"]);
    }

    #[test]
    fn test_emit_from_start_without_reset() {
        let mut a = args(2, 0, 2);
        a.start = Some(vec![0, 1]);
        a.no_reset = true;
        assert_eq!(output(a), vec!["1 2"]);
    }

    #[test]
    fn test_config_rejects_bad_arguments() {
        assert!(CliConfig::from_args(args(0, 0, 2)).is_err());

        let mut a = args(2, 0, 300);
        a.chars = true;
        assert!(CliConfig::from_args(a).is_err());

        let mut a = args(2, 0, 2);
        a.format = "plain".to_string();
        assert!(CliConfig::from_args(a).is_err());

        let mut a = args(2, 0, 2);
        a.start = Some(vec![0]);
        assert!(CliConfig::from_args(a).is_err());
    }

    #[test]
    fn test_config_rejects_chars_without_reset() {
        let mut a = args(2, 0, 256);
        a.chars = true;
        a.no_reset = true;
        a.start = Some(vec![0, 254]);
        assert!(CliConfig::from_args(a).is_err());

        let mut a = args(2, 0, 256);
        a.chars = true;
        a.start = Some(vec![0, 254]);
        let config = CliConfig::from_args(a).unwrap_or_else(|e| panic!("{e}"));
        let mut out = Vec::new();
        let result = emit(&config, &mut out);
        assert!(result.is_ok());
        if let Ok(printed) = result {
            assert_eq!(printed, 256 * 256 - 255);
        }
    }

    #[test]
    fn test_invalid_bounds_fail_when_building() {
        let config = CliConfig::from_args(args(2, 5, 5)).unwrap_or_else(|e| panic!("{e}"));
        assert!(config.build_odometer().is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from([
            "odometer",
            "3",
            "--minimum",
            "-2",
            "--maximum",
            "2",
            "--start=-2,0,1",
            "--prohibit",
            "a,b",
            "--no-reset",
        ]);
        assert!(parsed.is_ok());
        if let Ok(args) = parsed {
            assert_eq!(args.length, 3);
            assert_eq!(args.minimum, -2);
            assert_eq!(args.maximum, 2);
            assert_eq!(args.start, Some(vec![-2, 0, 1]));
            assert_eq!(args.prohibit, vec!['a', 'b']);
            assert!(args.no_reset);
            assert_eq!(args.format, FORMAT_PLACEHOLDER);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
