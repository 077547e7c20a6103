//! Tool to PDF.co endpoint mapping

use pdfsir_domain::ToolId;

/// Path of the temporary file upload endpoint
pub const UPLOAD_PATH: &str = "/v1/file/upload";

/// PDF.co endpoint path processing a tool
///
/// Several tools share an endpoint (e.g. split and extract-pages); the
/// provider distinguishes them by request parameters.
pub fn endpoint_path(tool: ToolId) -> &'static str {
    match tool {
        ToolId::ConvertToPdf => "/v1/pdf/convert/from/doc",
        ToolId::MergePdf => "/v1/pdf/merge",
        ToolId::SplitPdf => "/v1/pdf/split",
        ToolId::CompressPdf => "/v1/pdf/optimize",
        ToolId::RotatePdf => "/v1/pdf/edit/rotate",
        ToolId::ProtectPdf => "/v1/pdf/security/add",
        ToolId::UnlockPdf => "/v1/pdf/security/remove",
        ToolId::AddWatermark => "/v1/pdf/edit/add/text",
        ToolId::OcrPdf => "/v1/pdf/ocr",
        ToolId::AddPageNumbers => "/v1/pdf/edit/add/text",
        ToolId::ExtractPages => "/v1/pdf/split",
        ToolId::DeletePages => "/v1/pdf/edit/delete-pages",
        ToolId::RearrangePages => "/v1/pdf/edit/rearrange-pages",
        ToolId::FlattenPdf => "/v1/pdf/edit/flatten",
        ToolId::PdfToWord => "/v1/pdf/convert/to/doc",
        ToolId::PdfToExcel => "/v1/pdf/convert/to/xls",
        ToolId::PdfToPowerpoint => "/v1/pdf/convert/to/ppt",
        ToolId::PdfToImages => "/v1/pdf/convert/to/png",
        ToolId::PdfToHtml => "/v1/pdf/convert/to/html",
        ToolId::PdfToEpub => "/v1/pdf/convert/to/epub",
        ToolId::WordToPdf => "/v1/pdf/convert/from/doc",
        ToolId::ExcelToPdf => "/v1/pdf/convert/from/xls",
        ToolId::PowerpointToPdf => "/v1/pdf/convert/from/ppt",
        ToolId::ImagesToPdf => "/v1/pdf/convert/from/image",
        ToolId::HtmlToPdf => "/v1/pdf/convert/from/html",
        ToolId::EpubToPdf => "/v1/pdf/convert/from/epub",
    }
}

/// Resolve a raw tool identifier to its endpoint path
///
/// Returns `None` when the identifier names no supported tool.
pub fn resolve_endpoint(tool_id: &str) -> Option<&'static str> {
    tool_id.parse::<ToolId>().ok().map(endpoint_path)
}
