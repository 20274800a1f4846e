use crate::models::category::{Category, Complexity, ProtectionLevel, TargetPublic};
use serde::{Deserialize, Serialize};

/// One institution of the social protection network, as published in the
/// dataset asset. Field names on the wire follow the asset's Portuguese keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstitutionRecord {
    #[serde(rename = "instituicao")]
    pub name: String,
    #[serde(rename = "servicosPrestados")]
    pub services_provided: String,
    #[serde(rename = "nivelProtecao")]
    pub protection_level: Category<ProtectionLevel>,
    #[serde(rename = "complexidade")]
    pub complexity: Category<Complexity>,
    #[serde(rename = "tipificacao")]
    pub classification: String,
    #[serde(rename = "enderecoCompleto")]
    pub full_address: String,
    #[serde(rename = "cep")]
    pub postal_code: u32,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "distrito")]
    pub district: String,
    #[serde(rename = "tipoAtendimento")]
    pub service_type: String,
    /// Number of people the institution can serve
    #[serde(rename = "capacidadeAtendimento")]
    pub service_capacity: u64,
    #[serde(rename = "publico")]
    pub target_public: Category<TargetPublic>,
    #[serde(default, alias = "imagem", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, alias = "mapa", skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
}

impl InstitutionRecord {
    /// Case-insensitive substring match against name, neighborhood and
    /// services provided. `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }

        [&self.name, &self.neighborhood, &self.services_provided]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn has_detail_media(&self) -> bool {
        self.image_url.is_some() || self.map_embed_url.is_some()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a well-formed record; tests override the fields they care about.
    pub fn record(name: &str, district: &str, capacity: u64, level: ProtectionLevel) -> InstitutionRecord {
        InstitutionRecord {
            name: name.to_string(),
            services_provided: "Acolhimento institucional".to_string(),
            protection_level: Category::Known(level),
            complexity: Category::Known(Complexity::Basic),
            classification: "Serviço de Convivência".to_string(),
            full_address: "Rua Delfim Moreira, 100".to_string(),
            postal_code: 25953000,
            neighborhood: "Várzea".to_string(),
            district: district.to_string(),
            service_type: "Atendimento contínuo".to_string(),
            service_capacity: capacity,
            target_public: Category::Known(TargetPublic::Individual),
            image_url: None,
            map_embed_url: None,
        }
    }
}
