//! Value and axis label formatters.

pub mod date;
pub mod decimal;
pub mod index;
pub mod large_value;

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

pub use date::{determine_date_format, DateFormatter, SmartDateFormat, TimeUnit};
pub use decimal::format_grouped;
pub use index::IndexAxisFormatter;
pub use large_value::LargeValueFormatter;

/// The closed set of label formatters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValueFormatter {
    /// Fixed number of decimals with `,` grouping.
    Decimal { digits: usize },
    /// One decimal followed by `%`, separated by a space unless disabled.
    Percent {
        #[serde(default = "default_true")]
        separated: bool,
    },
    LargeValue(LargeValueFormatter),
    Index(IndexAxisFormatter),
    Date(DateFormatter),
}

fn default_true() -> bool {
    true
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::Decimal { digits: 1 }
    }
}

impl ValueFormatter {
    /// The default axis formatter for ticks computed with `decimals` digits.
    pub fn default_for_decimals(decimals: usize) -> Self {
        Self::Decimal { digits: decimals }
    }

    pub fn percent() -> Self {
        Self::Percent { separated: true }
    }

    pub fn format(&self, value: f64) -> ChartResult<String> {
        Ok(match self {
            Self::Decimal { digits } => format_grouped(value, *digits),
            Self::Percent { separated } => {
                let sep = if *separated { " " } else { "" };
                format!("{}{}%", format_grouped(value, 1), sep)
            }
            Self::LargeValue(f) => return f.format(value),
            Self::Index(f) => f.format(value),
            Self::Date(f) => f.format(value),
        })
    }
}
