//! English and Hindi UI strings.

use serde::{Deserialize, Serialize};

use crate::domain::LineItemResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            _ => None,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// Caption for the switch button, written in the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "हिन्दी",
            Language::Hi => "English",
        }
    }

    pub fn line_label<'a>(&self, line: &'a LineItemResult) -> &'a str {
        match self {
            Language::En => &line.label,
            Language::Hi => &line.localized_label,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    Title,
    Length,
    Breadth,
    Floors,
    Contingency,
    Rates,
    Calculate,
    ExportPdf,
    ExportCsv,
    History,
    Estimate,
    Material,
    Qty,
    Rate,
    Cost,
    TotalCost,
    Error,
    InvalidDimensions,
    Saved,
    ExportCsvFailed,
    ExportReportFailed,
}

pub fn t(language: Language, text: Text) -> &'static str {
    match language {
        Language::En => english(text),
        Language::Hi => hindi(text),
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::Title => "Construction Cost Estimator",
        Text::Length => "Length (ft)",
        Text::Breadth => "Breadth (ft)",
        Text::Floors => "Floors",
        Text::Contingency => "Contingency (%)",
        Text::Rates => "Material Rates",
        Text::Calculate => "Calculate",
        Text::ExportPdf => "Export Report",
        Text::ExportCsv => "Export CSV",
        Text::History => "View History",
        Text::Estimate => "Estimate",
        Text::Material => "Material",
        Text::Qty => "Quantity",
        Text::Rate => "Rate",
        Text::Cost => "Cost",
        Text::TotalCost => "Total Cost",
        Text::Error => "Error",
        Text::InvalidDimensions => "Please enter valid dimensions",
        Text::Saved => "Saved",
        Text::ExportCsvFailed => "Failed to export CSV. Please try again.",
        Text::ExportReportFailed => "Failed to export report. Please try again.",
    }
}

fn hindi(text: Text) -> &'static str {
    match text {
        Text::Title => "निर्माण लागत कैलकुलेटर",
        Text::Length => "लंबाई (फीट)",
        Text::Breadth => "चौड़ाई (फीट)",
        Text::Floors => "मंज़िलें",
        Text::Contingency => "अतिरिक्त (%)",
        Text::Rates => "सामग्री दर",
        Text::Calculate => "गणना करें",
        Text::ExportPdf => "रिपोर्ट निर्यात",
        Text::ExportCsv => "CSV निर्यात",
        Text::History => "इतिहास देखें",
        Text::Estimate => "अनुमान",
        Text::Material => "सामग्री",
        Text::Qty => "मात्रा",
        Text::Rate => "दर",
        Text::Cost => "लागत",
        Text::TotalCost => "कुल लागत",
        Text::Error => "त्रुटि",
        Text::InvalidDimensions => "कृपया मान्य आयाम दर्ज करें",
        Text::Saved => "सहेजा गया",
        Text::ExportCsvFailed => "CSV निर्यात विफल रहा। कृपया पुनः प्रयास करें।",
        Text::ExportReportFailed => "रिपोर्ट निर्यात विफल रहा। कृपया पुनः प्रयास करें।",
    }
}
