use std::path::PathBuf;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Unknown option {0}")]
    UnknownOption(String),
    #[error("Option {0} expects a value")]
    MissingValue(String),
    #[error("Option {option} expects a number, got {value}")]
    InvalidNumber { option: String, value: String },
    #[error("Only one input file can be given, got {0} too")]
    ExtraInput(String),
}

/// What the demo reads and which operators it runs, in pipeline order:
/// skip, grep, upper, head, tail, chunk.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoConfiguration {
    pub input: Option<PathBuf>,
    pub skip: Option<usize>,
    pub grep: Option<String>,
    pub upper: bool,
    pub head: Option<usize>,
    pub tail: Option<usize>,
    pub chunk: Option<usize>,
    pub keys: bool,
}

impl DemoConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_args<I>(args: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut configuration = Self::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--skip" => configuration.skip = Some(number(&arg, args.next())?),
                "--head" => configuration.head = Some(number(&arg, args.next())?),
                "--tail" => configuration.tail = Some(number(&arg, args.next())?),
                "--chunk" => configuration.chunk = Some(number(&arg, args.next())?),
                "--grep" => {
                    configuration.grep =
                        Some(args.next().ok_or(ConfigurationError::MissingValue(arg))?)
                }
                "--upper" => configuration.upper = true,
                "--keys" => configuration.keys = true,
                option if option.starts_with("--") => {
                    return Err(ConfigurationError::UnknownOption(arg));
                }
                _ => {
                    if configuration.input.is_some() {
                        return Err(ConfigurationError::ExtraInput(arg));
                    }
                    configuration.input = Some(arg.into());
                }
            }
        }
        Ok(configuration)
    }
}

fn number(option: &str, value: Option<String>) -> Result<usize, ConfigurationError> {
    let value = value.ok_or_else(|| ConfigurationError::MissingValue(option.to_owned()))?;
    value
        .parse()
        .map_err(|_| ConfigurationError::InvalidNumber {
            option: option.to_owned(),
            value,
        })
}
