use clap::ValueEnum;
use std::fmt;
use zakboek_types::BagType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum BagTypeArg {
    Mini,
    Small,
}

impl fmt::Display for BagTypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BagTypeArg::Mini => write!(f, "mini"),
            BagTypeArg::Small => write!(f, "small"),
        }
    }
}

impl From<BagTypeArg> for BagType {
    fn from(arg: BagTypeArg) -> Self {
        match arg {
            BagTypeArg::Mini => BagType::Mini,
            BagTypeArg::Small => BagType::Small,
        }
    }
}
