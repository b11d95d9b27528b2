/// Common country names to two-letter search-engine region codes.
const REGION_CODES: &[(&str, &str)] = &[
    ("australia", "au"),
    ("austria", "at"),
    ("belgium", "be"),
    ("brazil", "br"),
    ("canada", "ca"),
    ("china", "cn"),
    ("denmark", "dk"),
    ("france", "fr"),
    ("germany", "de"),
    ("india", "in"),
    ("indonesia", "id"),
    ("ireland", "ie"),
    ("italy", "it"),
    ("japan", "jp"),
    ("mexico", "mx"),
    ("nederland", "nl"),
    ("netherlands", "nl"),
    ("new zealand", "nz"),
    ("norway", "no"),
    ("poland", "pl"),
    ("portugal", "pt"),
    ("singapore", "sg"),
    ("south africa", "za"),
    ("south korea", "kr"),
    ("spain", "es"),
    ("sweden", "se"),
    ("switzerland", "ch"),
    ("uk", "gb"),
    ("united kingdom", "gb"),
    ("united states", "us"),
    ("united states of america", "us"),
    ("usa", "us"),
];

/// Region code used when the country is not in the table.
pub const FALLBACK_REGION: &str = "us";

/// Map a free-form country name to its region code.
#[must_use]
pub fn region_code(country: &str) -> &'static str {
    let country = country.trim().to_lowercase();
    REGION_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map_or(FALLBACK_REGION, |(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_ok() {
        assert_eq!(region_code("France"), "fr");
        assert_eq!(region_code("  australia "), "au");
        assert_eq!(region_code("UK"), "gb");
    }

    #[test]
    fn unknown_country_falls_back_ok() {
        assert_eq!(region_code("Atlantis"), FALLBACK_REGION);
        assert_eq!(region_code("Unknown"), FALLBACK_REGION);
        assert_eq!(region_code(""), FALLBACK_REGION);
    }
}
