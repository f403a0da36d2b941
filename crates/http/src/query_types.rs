//! Request/query types.
//!
//! `/api/studies` criteria are parsed leniently, key by key, instead of
//! through the `Query` extractor: one undecodable parameter must degrade to
//! an absent criterion, not reject the whole request. The filter contract
//! stays total over arbitrary caller input.

use geocat_core::StudyFilter;

/// Query parameters for `GET /api/studies`. All optional.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct StudyQuery {
    pub organism: Option<String>,
    pub data_type: Option<String>,
    pub molecule: Option<String>,
    pub superseries: Option<String>,
}

impl StudyQuery {
    /// Parse a raw query string, dropping anything that does not decode.
    ///
    /// Unknown keys are ignored; a key whose value is not valid
    /// percent-encoded UTF-8 is treated as absent rather than failing the
    /// request.
    #[must_use]
    pub fn from_raw_query(raw: Option<&str>) -> Self {
        let mut query = Self::default();
        let Some(raw) = raw else { return query };

        for pair in raw.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let Ok(key) = urlencoding::decode(key) else { continue };
            // Form encoding spells spaces as '+'.
            let plus_decoded = value.replace('+', " ");
            let Some(value) = urlencoding::decode(&plus_decoded).ok().map(|v| v.into_owned())
            else {
                continue;
            };
            match key.as_ref() {
                "organism" => query.organism = Some(value),
                "data_type" => query.data_type = Some(value),
                "molecule" => query.molecule = Some(value),
                "superseries" => query.superseries = Some(value),
                _ => {},
            }
        }
        query
    }

    /// Build the engine filter, collapsing empty parameter values to absent.
    ///
    /// `?organism=` and a missing `organism` both mean "no constraint".
    #[must_use]
    pub fn into_filter(self) -> StudyFilter {
        StudyFilter {
            organism: present(self.organism),
            data_type: present(self.data_type),
            molecule: present(self.molecule),
            superseries: present(self.superseries),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_collapse_to_absent() {
        let query = StudyQuery {
            organism: Some(String::new()),
            data_type: None,
            molecule: Some("DNA".to_string()),
            superseries: Some(String::new()),
        };
        let filter = query.into_filter();
        assert_eq!(filter.organism, None);
        assert_eq!(filter.data_type, None);
        assert_eq!(filter.molecule, Some("DNA".to_string()));
        assert_eq!(filter.superseries, None);
    }

    #[test]
    fn all_absent_builds_the_empty_filter() {
        assert!(StudyQuery::default().into_filter().is_empty());
        assert!(StudyQuery::from_raw_query(None).into_filter().is_empty());
    }

    #[test]
    fn raw_query_decodes_percent_and_plus_encoding() {
        let query =
            StudyQuery::from_raw_query(Some("organism=Homo+sapiens&molecule=DNA%2C%20RNA"));
        assert_eq!(query.organism, Some("Homo sapiens".to_string()));
        assert_eq!(query.molecule, Some("DNA, RNA".to_string()));
        assert_eq!(query.superseries, None);
    }

    #[test]
    fn undecodable_value_degrades_to_absent_without_dropping_the_rest() {
        // %FF is not valid UTF-8: the organism criterion vanishes but the
        // query as a whole still succeeds with the remaining criteria.
        let query = StudyQuery::from_raw_query(Some("organism=%FF&superseries=yes"));
        assert_eq!(query.organism, None);
        assert_eq!(query.superseries, Some("yes".to_string()));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = StudyQuery::from_raw_query(Some("limit=10&organism=mouse"));
        assert_eq!(query.organism, Some("mouse".to_string()));
        assert_eq!(query, StudyQuery { organism: Some("mouse".to_string()), ..Default::default() });
    }
}
