//! Tool descriptors
//!
//! Static metadata shown to users for each tool. The table is compiled in and
//! never changes at runtime.

use serde::Serialize;
use std::fmt;

use super::ToolId;

/// Category a tool is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Convert,
    Edit,
    Security,
    Optimize,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Convert => "convert",
            Category::Edit => "edit",
            Category::Security => "security",
            Category::Optimize => "optimize",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing metadata of a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub id: ToolId,
    pub title: &'static str,
    pub description: &'static str,
    /// File extensions accepted by the tool, with the leading dot
    pub accepted_formats: &'static [&'static str],
    pub category: Category,
}

const PDF: &[&str] = &[".pdf"];
const OFFICE: &[&str] = &[".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".txt", ".rtf"];
const WORD: &[&str] = &[".doc", ".docx"];
const EXCEL: &[&str] = &[".xls", ".xlsx"];
const POWERPOINT: &[&str] = &[".ppt", ".pptx"];
const IMAGES: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff"];
const HTML: &[&str] = &[".html", ".htm"];
const EPUB: &[&str] = &[".epub"];

impl ToolId {
    /// Metadata for this tool
    pub fn descriptor(self) -> ToolDescriptor {
        let (title, description, accepted_formats, category) = match self {
            ToolId::ConvertToPdf => (
                "Convert to PDF",
                "Convert Word, Excel, PowerPoint, and other documents to PDF",
                OFFICE,
                Category::Convert,
            ),
            ToolId::MergePdf => (
                "Merge PDF",
                "Combine multiple PDF files into one document",
                PDF,
                Category::Edit,
            ),
            ToolId::SplitPdf => (
                "Split PDF",
                "Split a PDF file into separate pages or ranges",
                PDF,
                Category::Edit,
            ),
            ToolId::CompressPdf => (
                "Compress PDF",
                "Reduce PDF file size while maintaining quality",
                PDF,
                Category::Optimize,
            ),
            ToolId::RotatePdf => (
                "Rotate PDF",
                "Rotate PDF pages clockwise or counterclockwise",
                PDF,
                Category::Edit,
            ),
            ToolId::ProtectPdf => (
                "Protect PDF",
                "Add password protection to your PDF files",
                PDF,
                Category::Security,
            ),
            ToolId::UnlockPdf => (
                "Unlock PDF",
                "Remove password protection from PDF files",
                PDF,
                Category::Security,
            ),
            ToolId::AddWatermark => (
                "Add Watermark",
                "Add text or image watermarks to PDF pages",
                PDF,
                Category::Edit,
            ),
            ToolId::OcrPdf => (
                "OCR PDF",
                "Extract text from scanned PDF documents",
                PDF,
                Category::Convert,
            ),
            ToolId::AddPageNumbers => (
                "Add Page Numbers",
                "Add page numbers to your PDF documents",
                PDF,
                Category::Edit,
            ),
            ToolId::ExtractPages => (
                "Extract Pages",
                "Extract specific pages from PDF documents",
                PDF,
                Category::Edit,
            ),
            ToolId::DeletePages => (
                "Delete Pages",
                "Remove specific pages from PDF documents",
                PDF,
                Category::Edit,
            ),
            ToolId::RearrangePages => (
                "Rearrange Pages",
                "Reorder pages in your PDF documents",
                PDF,
                Category::Edit,
            ),
            ToolId::FlattenPdf => (
                "Flatten PDF",
                "Flatten PDF forms and annotations",
                PDF,
                Category::Edit,
            ),
            ToolId::PdfToWord => (
                "PDF to Word",
                "Convert PDF files to editable Word documents",
                PDF,
                Category::Convert,
            ),
            ToolId::PdfToExcel => (
                "PDF to Excel",
                "Convert PDF files to Excel spreadsheets",
                PDF,
                Category::Convert,
            ),
            ToolId::PdfToPowerpoint => (
                "PDF to PowerPoint",
                "Convert PDF files to PowerPoint presentations",
                PDF,
                Category::Convert,
            ),
            ToolId::PdfToImages => (
                "PDF to Images",
                "Convert PDF pages to PNG or JPG images",
                PDF,
                Category::Convert,
            ),
            ToolId::PdfToHtml => (
                "PDF to HTML",
                "Convert PDF files to HTML web pages",
                PDF,
                Category::Convert,
            ),
            ToolId::PdfToEpub => (
                "PDF to EPUB",
                "Convert PDF files to EPUB e-book format",
                PDF,
                Category::Convert,
            ),
            ToolId::WordToPdf => (
                "Word to PDF",
                "Convert Word documents to PDF format",
                WORD,
                Category::Convert,
            ),
            ToolId::ExcelToPdf => (
                "Excel to PDF",
                "Convert Excel spreadsheets to PDF format",
                EXCEL,
                Category::Convert,
            ),
            ToolId::PowerpointToPdf => (
                "PowerPoint to PDF",
                "Convert PowerPoint presentations to PDF format",
                POWERPOINT,
                Category::Convert,
            ),
            ToolId::ImagesToPdf => (
                "Images to PDF",
                "Convert images to PDF documents",
                IMAGES,
                Category::Convert,
            ),
            ToolId::HtmlToPdf => (
                "HTML to PDF",
                "Convert HTML web pages to PDF documents",
                HTML,
                Category::Convert,
            ),
            ToolId::EpubToPdf => (
                "EPUB to PDF",
                "Convert EPUB e-books to PDF format",
                EPUB,
                Category::Convert,
            ),
        };

        ToolDescriptor {
            id: self,
            title,
            description,
            accepted_formats,
            category,
        }
    }

    /// Tools featured in the "Most Popular" group of the catalog
    pub fn is_popular(self) -> bool {
        matches!(
            self,
            ToolId::MergePdf | ToolId::SplitPdf | ToolId::CompressPdf | ToolId::ConvertToPdf
        )
    }
}
