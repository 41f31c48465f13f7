/// Country reference entry (static version, lives in the built-in table)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryInfo {
    /// ISO 3166-1 alpha-2 code (e.g., "DE")
    pub code: &'static str,
    /// Display name (e.g., "Germany")
    pub name: &'static str,
    /// International dialing prefix (e.g., "+49")
    pub dial_code: &'static str,
    /// ISO 4217 currency code (e.g., "EUR")
    pub currency: &'static str,
    /// Region name (e.g., "Europe")
    pub region: &'static str,
}

impl CountryInfo {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        dial_code: &'static str,
        currency: &'static str,
        region: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            dial_code,
            currency,
            region,
        }
    }
}
