//! Table row and detail view of a country

use country_explorer_core::types::{Country, NOT_AVAILABLE};

/// One table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    /// Flag alt text (`"Flag of ..."`)
    pub flag: String,
    /// Official name, also the row identifier
    pub official: String,
    pub cca2: String,
    pub cca3: String,
    /// Common native name (first language code)
    pub native_name: String,
    /// Dialing root, e.g. `"+3"`
    pub idd: String,
}

impl CountryRow {
    /// Identifier passed back to the controller on activation.
    pub fn id(&self) -> &str {
        &self.official
    }
}

impl From<&Country> for CountryRow {
    fn from(country: &Country) -> Self {
        Self {
            flag: country.flag_alt_text(),
            official: country.id().to_string(),
            cca2: country.cca2.clone(),
            cca3: country.cca3.clone(),
            native_name: country.native_common_name().to_string(),
            idd: country.dialing_prefix().to_string(),
        }
    }
}

/// Content of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub title: String,
    pub flag_svg: String,
    pub common_name: String,
    pub population: String,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub languages: String,
    pub codes: String,
    pub dialing: String,
    pub alt_spellings: String,
}

impl CountryDetail {
    /// Label/value pairs in display order (title and flag excluded).
    pub fn fields(&self) -> [(&'static str, &str); 9] {
        [
            ("Common name", &self.common_name),
            ("Population", &self.population),
            ("Region", &self.region),
            ("Subregion", &self.subregion),
            ("Capital", &self.capital),
            ("Languages", &self.languages),
            ("Codes", &self.codes),
            ("Dialing", &self.dialing),
            ("Also known as", &self.alt_spellings),
        ]
    }
}

impl From<&Country> for CountryDetail {
    fn from(country: &Country) -> Self {
        let dialing = country.dialing_codes();
        Self {
            title: country.id().to_string(),
            flag_svg: country.flags.svg.clone(),
            common_name: country.name.common.clone(),
            population: country.population_display(),
            region: or_not_available(country.region.clone()),
            subregion: country.subregion_display().to_string(),
            capital: country.capital_display(),
            languages: country.languages_display(),
            codes: or_not_available(
                [country.cca2.as_str(), country.cca3.as_str()]
                    .into_iter()
                    .filter(|code| !code.is_empty())
                    .collect::<Vec<_>>()
                    .join(" / "),
            ),
            dialing: or_not_available(dialing.join(", ")),
            alt_spellings: or_not_available(country.alt_spellings.join(", ")),
        }
    }
}

fn or_not_available(value: String) -> String {
    if value.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finland() -> Country {
        serde_json::from_str(
            r#"{
                "name": {
                    "common": "Finland",
                    "official": "Republic of Finland",
                    "nativeName": {
                        "fin": {"official": "Suomen tasavalta", "common": "Suomi"},
                        "swe": {"official": "Republiken Finland", "common": "Finland"}
                    }
                },
                "cca2": "FI",
                "cca3": "FIN",
                "idd": {"root": "+3", "suffixes": ["58"]},
                "capital": ["Helsinki"],
                "altSpellings": ["FI", "Suomi"],
                "region": "Europe",
                "subregion": "Northern Europe",
                "languages": {"fin": "Finnish", "swe": "Swedish"},
                "population": 5530719,
                "flags": {"png": "https://flagcdn.com/w320/fi.png", "svg": "https://flagcdn.com/fi.svg"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn row_columns() {
        let row = CountryRow::from(&finland());
        assert_eq!(row.flag, "Flag of Suomi");
        assert_eq!(row.id(), "Republic of Finland");
        assert_eq!(row.cca2, "FI");
        assert_eq!(row.cca3, "FIN");
        assert_eq!(row.native_name, "Suomi");
        assert_eq!(row.idd, "+3");
    }

    #[test]
    fn detail_fields() {
        let detail = CountryDetail::from(&finland());
        assert_eq!(detail.title, "Republic of Finland");
        assert_eq!(detail.flag_svg, "https://flagcdn.com/fi.svg");
        assert_eq!(detail.population, "5,530,719");
        assert_eq!(detail.capital, "Helsinki");
        assert_eq!(detail.languages, "Finnish, Swedish");
        assert_eq!(detail.codes, "FI / FIN");
        assert_eq!(detail.dialing, "+358");
        assert_eq!(detail.alt_spellings, "FI, Suomi");
    }

    #[test]
    fn sparse_record_falls_back() {
        let country: Country =
            serde_json::from_str(r#"{"name": {"common": "Antarctica", "official": "Antarctica"}}"#)
                .unwrap();
        let detail = CountryDetail::from(&country);
        for (label, value) in detail.fields() {
            if label != "Common name" && label != "Population" {
                assert_eq!(value, NOT_AVAILABLE, "{label}");
            }
        }
        assert_eq!(detail.population, "0");
    }
}
