// src/domain/price.rs

use std::fmt;
use std::str::FromStr;

/// Pulls the rupee amount out of a display label such as `"Rs. 2,500/kg"`.
///
/// The first run of digits (thousands separators allowed) is the price; any
/// fractional part is dropped. Returns `None` when the label has no digits.
pub fn parse_price_label(label: &str) -> Option<u64> {
    let start = label.find(|c: char| c.is_ascii_digit())?;

    let digits: String = label[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();

    digits.parse().ok()
}

/// Formats a rupee amount the way labels show it: `Rs. 2,500`.
pub fn format_rupees(amount: u64) -> String {
    let raw = amount.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);

    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    format!("Rs. {out}")
}

/// A price range filter. `max == None` means open ended ("2000+").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBucket {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBucket {
    /// The buckets offered by the filter form.
    pub const PRESETS: [PriceBucket; 4] = [
        PriceBucket { min: 0, max: Some(500) },
        PriceBucket { min: 500, max: Some(1000) },
        PriceBucket { min: 1000, max: Some(2000) },
        PriceBucket { min: 2000, max: None },
    ];

    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("{} - {}", format_rupees(self.min), format_rupees(max)),
            None => format!("{} and above", format_rupees(self.min)),
        }
    }
}

/// Renders the bucket id used in query strings, e.g. `500-1000` or `2000+`.
impl fmt::Display for PriceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

impl FromStr for PriceBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("invalid price range '{s}'");

        if let Some(min) = s.strip_suffix('+') {
            let min = min.trim().parse().map_err(|_| invalid())?;
            return Ok(PriceBucket { min, max: None });
        }

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min: u64 = min.trim().parse().map_err(|_| invalid())?;
        let max: u64 = max.trim().parse().map_err(|_| invalid())?;

        if max < min {
            return Err(invalid());
        }

        Ok(PriceBucket {
            min,
            max: Some(max),
        })
    }
}
