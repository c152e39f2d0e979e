// src/fetch/types.rs

use serde::Deserialize;

/// One element of the SRS lookup response. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substance {
    #[serde(default)]
    pub systematic_name: Option<String>,
    #[serde(default)]
    pub epa_name: Option<String>,
    #[serde(default)]
    pub current_cas_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub synonyms: Vec<Synonym>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synonym {
    #[serde(default)]
    pub synonym_name: Option<String>,
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<Synonym>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Synonym>>::deserialize(de)?.unwrap_or_default())
}

impl Substance {
    /// All synonym names joined with `;`. Null names are skipped.
    pub fn joined_synonyms(&self) -> String {
        self.synonyms
            .iter()
            .filter_map(|s| s.synonym_name.as_deref())
            .collect::<Vec<_>>()
            .join(";")
    }
}
