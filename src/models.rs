//! Data structures returned by the campaign analytics API.
//!
//! Every record here is a read-only value received from the remote side.
//! Numeric metrics are optional: a missing or `null` field is `None`, which
//! the display layer renders differently from zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::datetime;

/// Campaign summary as listed by `/campaigns/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    pub tipo_campania: String,
    /// ISO date, kept verbatim so malformed values still reach the display layer
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub universo_zona_metro: Option<i64>,
    pub impactos_personas: Option<i64>,
    pub impactos_vehiculos: Option<i64>,
    pub frecuencia_calculada: Option<f64>,
    pub frecuencia_promedio: Option<f64>,
    pub alcance: Option<i64>,
    pub nse_ab: Option<f64>,
    pub nse_c: Option<f64>,
    pub nse_cmas: Option<f64>,
    pub nse_d: Option<f64>,
    pub nse_dmas: Option<f64>,
    pub nse_e: Option<f64>,
    pub edad_0a14: Option<f64>,
    pub edad_15a19: Option<f64>,
    pub edad_20a24: Option<f64>,
    pub edad_25a34: Option<f64>,
    pub edad_35a44: Option<f64>,
    pub edad_45a64: Option<f64>,
    pub edad_65mas: Option<f64>,
    pub hombres: Option<f64>,
    pub mujeres: Option<f64>,
}

impl Campaign {
    /// Campaign with only its identifying fields set.
    pub fn new(name: &str, tipo_campania: &str, fecha_inicio: &str, fecha_fin: &str) -> Self {
        Self {
            name: name.to_string(),
            tipo_campania: tipo_campania.to_string(),
            fecha_inicio: fecha_inicio.to_string(),
            fecha_fin: fecha_fin.to_string(),
            universo_zona_metro: None,
            impactos_personas: None,
            impactos_vehiculos: None,
            frecuencia_calculada: None,
            frecuencia_promedio: None,
            alcance: None,
            nse_ab: None,
            nse_c: None,
            nse_cmas: None,
            nse_d: None,
            nse_dmas: None,
            nse_e: None,
            edad_0a14: None,
            edad_15a19: None,
            edad_20a24: None,
            edad_25a34: None,
            edad_35a44: None,
            edad_45a64: None,
            edad_65mas: None,
            hombres: None,
            mujeres: None,
        }
    }
}

/// Impact metrics for one period of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignPeriod {
    pub id: i64,
    pub campaign_name: String,
    pub period: String,
    pub impactos_periodo_personas: Option<i64>,
    pub impactos_periodo_vehiculos: Option<i64>,
}

/// Metrics for one advertising site of a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSite {
    pub id: i64,
    pub campaign_name: String,
    pub codigo_del_sitio: String,
    pub tipo_de_mueble: Option<String>,
    pub tipo_de_anuncio: Option<String>,
    pub estado: Option<String>,
    pub municipio: Option<String>,
    pub zm: Option<String>,
    pub frecuencia_catorcenal: Option<f64>,
    pub frecuencia_mensual: Option<f64>,
    pub impactos_catorcenal: Option<i64>,
    pub impactos_mensuales: Option<i64>,
    pub alcance_mensual: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralSummary {
    pub impactos_personas: Option<i64>,
    pub impactos_vehiculos: Option<i64>,
    pub alcance: Option<i64>,
    pub frecuencia_calculada: Option<f64>,
    pub frecuencia_promedio: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_periodos: i64,
    pub impactos_personas: i64,
    pub impactos_vehiculos: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    pub total_sitios: i64,
    pub impactos_mensuales: i64,
    pub impactos_catorcenal: i64,
    pub alcance_mensual_promedio: f64,
}

/// Full campaign record returned by `/campaigns/<name>`.
///
/// The three summaries are computed server-side and displayed as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetail {
    #[serde(flatten)]
    pub campaign: Campaign,
    #[serde(default)]
    pub periods: Vec<CampaignPeriod>,
    #[serde(default)]
    pub sites: Vec<CampaignSite>,
    #[serde(default)]
    pub general_summary: GeneralSummary,
    #[serde(default)]
    pub period_summary: PeriodSummary,
    #[serde(default)]
    pub site_summary: SiteSummary,
}

impl CampaignDetail {
    /// Sites ordered by monthly impacts, highest first; sites without a value go last.
    pub fn top_sites(&self, limit: usize) -> Vec<&CampaignSite> {
        let mut sites: Vec<&CampaignSite> = self.sites.iter().collect();
        sites.sort_by(|a, b| b.impactos_mensuales.cmp(&a.impactos_mensuales));
        sites.truncate(limit);
        sites
    }
}

/// One page of results plus the total across all pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
}

/// Campaign type filter values accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignType {
    Mensual,
    Catorcenal,
}

impl CampaignType {
    /// Wire value used in the `tipo_campania` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::Mensual => "mensual",
            CampaignType::Catorcenal => "catorcenal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignType::Mensual => "Mensual",
            CampaignType::Catorcenal => "Catorcenal",
        }
    }
}

/// Inclusive date range used by the date search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start_param(&self) -> String {
        datetime::format_ymd(self.start)
    }

    pub fn end_param(&self) -> String {
        datetime::format_ymd(self.end)
    }
}
