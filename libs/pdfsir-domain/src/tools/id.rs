use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::processing::ProcessingError;

/// Identifier of one of the document tools offered by the service
///
/// The set of tools is closed: every identifier the HTTP layer accepts must
/// parse into one of these variants, so a typo in a lookup table becomes a
/// compile error instead of a runtime miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolId {
    ConvertToPdf,
    MergePdf,
    SplitPdf,
    CompressPdf,
    RotatePdf,
    ProtectPdf,
    UnlockPdf,
    AddWatermark,
    OcrPdf,
    AddPageNumbers,
    ExtractPages,
    DeletePages,
    RearrangePages,
    FlattenPdf,
    PdfToWord,
    PdfToExcel,
    PdfToPowerpoint,
    PdfToImages,
    PdfToHtml,
    PdfToEpub,
    WordToPdf,
    ExcelToPdf,
    PowerpointToPdf,
    ImagesToPdf,
    HtmlToPdf,
    EpubToPdf,
}

impl ToolId {
    /// Every tool, in catalog order
    pub const ALL: [ToolId; 26] = [
        ToolId::ConvertToPdf,
        ToolId::MergePdf,
        ToolId::SplitPdf,
        ToolId::CompressPdf,
        ToolId::RotatePdf,
        ToolId::ProtectPdf,
        ToolId::UnlockPdf,
        ToolId::AddWatermark,
        ToolId::OcrPdf,
        ToolId::AddPageNumbers,
        ToolId::ExtractPages,
        ToolId::DeletePages,
        ToolId::RearrangePages,
        ToolId::FlattenPdf,
        ToolId::PdfToWord,
        ToolId::PdfToExcel,
        ToolId::PdfToPowerpoint,
        ToolId::PdfToImages,
        ToolId::PdfToHtml,
        ToolId::PdfToEpub,
        ToolId::WordToPdf,
        ToolId::ExcelToPdf,
        ToolId::PowerpointToPdf,
        ToolId::ImagesToPdf,
        ToolId::HtmlToPdf,
        ToolId::EpubToPdf,
    ];

    /// The identifier as it appears in URLs (e.g. `merge-pdf`)
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::ConvertToPdf => "convert-to-pdf",
            ToolId::MergePdf => "merge-pdf",
            ToolId::SplitPdf => "split-pdf",
            ToolId::CompressPdf => "compress-pdf",
            ToolId::RotatePdf => "rotate-pdf",
            ToolId::ProtectPdf => "protect-pdf",
            ToolId::UnlockPdf => "unlock-pdf",
            ToolId::AddWatermark => "add-watermark",
            ToolId::OcrPdf => "ocr-pdf",
            ToolId::AddPageNumbers => "add-page-numbers",
            ToolId::ExtractPages => "extract-pages",
            ToolId::DeletePages => "delete-pages",
            ToolId::RearrangePages => "rearrange-pages",
            ToolId::FlattenPdf => "flatten-pdf",
            ToolId::PdfToWord => "pdf-to-word",
            ToolId::PdfToExcel => "pdf-to-excel",
            ToolId::PdfToPowerpoint => "pdf-to-powerpoint",
            ToolId::PdfToImages => "pdf-to-images",
            ToolId::PdfToHtml => "pdf-to-html",
            ToolId::PdfToEpub => "pdf-to-epub",
            ToolId::WordToPdf => "word-to-pdf",
            ToolId::ExcelToPdf => "excel-to-pdf",
            ToolId::PowerpointToPdf => "powerpoint-to-pdf",
            ToolId::ImagesToPdf => "images-to-pdf",
            ToolId::HtmlToPdf => "html-to-pdf",
            ToolId::EpubToPdf => "epub-to-pdf",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ProcessingError::tool_not_found(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifier() {
        assert_eq!("merge-pdf".parse::<ToolId>().unwrap(), ToolId::MergePdf);
        assert_eq!(
            "powerpoint-to-pdf".parse::<ToolId>().unwrap(),
            ToolId::PowerpointToPdf
        );
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "merge-pdfs".parse::<ToolId>().unwrap_err();
        assert!(matches!(err, ProcessingError::ToolNotFound(ref id) if id == "merge-pdfs"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Merge-PDF".parse::<ToolId>().is_err());
    }

    #[test]
    fn test_every_identifier_round_trips_through_str() {
        for tool in ToolId::ALL {
            assert_eq!(tool.as_str().parse::<ToolId>().unwrap(), tool);
        }
    }

    #[test]
    fn test_serde_name_matches_url_name() {
        for tool in ToolId::ALL {
            let json = serde_json::to_string(&tool).unwrap();
            assert_eq!(json, format!("\"{}\"", tool.as_str()));
        }
    }
}
