//! Catalog listing and search over the tool registry

use std::str::FromStr;

use super::{Category, ToolDescriptor, ToolId};
use crate::processing::ProcessingError;

/// Group filter applied to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    Popular,
    Category(Category),
}

impl CatalogFilter {
    fn matches(&self, tool: ToolId, descriptor: &ToolDescriptor) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Popular => tool.is_popular(),
            CatalogFilter::Category(category) => descriptor.category == *category,
        }
    }
}

impl FromStr for CatalogFilter {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(CatalogFilter::All),
            "popular" => Ok(CatalogFilter::Popular),
            "convert" => Ok(CatalogFilter::Category(Category::Convert)),
            "edit" => Ok(CatalogFilter::Category(Category::Edit)),
            "security" => Ok(CatalogFilter::Category(Category::Security)),
            "optimize" => Ok(CatalogFilter::Category(Category::Optimize)),
            other => Err(ProcessingError::invalid_input(format!(
                "Unknown category: {}",
                other
            ))),
        }
    }
}

/// All tool descriptors in catalog order
pub fn catalog() -> Vec<ToolDescriptor> {
    ToolId::ALL.into_iter().map(ToolId::descriptor).collect()
}

/// Filter the catalog by group and by a case-insensitive search term
///
/// The term matches a substring of the title or the description. An empty
/// term matches every tool of the group.
pub fn search(filter: CatalogFilter, term: &str) -> Vec<ToolDescriptor> {
    let needle = term.trim().to_lowercase();

    ToolId::ALL
        .into_iter()
        .filter_map(|tool| {
            let descriptor = tool.descriptor();
            if !filter.matches(tool, &descriptor) {
                return None;
            }
            if needle.is_empty()
                || descriptor.title.to_lowercase().contains(&needle)
                || descriptor.description.to_lowercase().contains(&needle)
            {
                Some(descriptor)
            } else {
                None
            }
        })
        .collect()
}
