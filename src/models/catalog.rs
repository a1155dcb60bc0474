use super::{Collection, ContentRecord};

/// Immutable snapshot of every collection in a catalog.
///
/// Built once before requests are served and shared read-only afterwards.
/// Each collection keeps the order its records were added in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    collections: [Vec<ContentRecord>; 8],
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Group records by their collection, keeping their relative order.
    pub fn from_records(records: impl IntoIterator<Item = ContentRecord>) -> Self {
        let mut builder = Self::builder();
        for record in records {
            builder = builder.record(record);
        }
        builder.build()
    }

    pub fn collection(&self, collection: Collection) -> &[ContentRecord] {
        &self.collections[collection.index()]
    }

    pub fn len(&self) -> usize {
        self.collections.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ordered resource set for one export.
    ///
    /// Base collections come first in [`Collection::BASE`] order; custom pages
    /// are appended at the end only when `include_custom_pages` is set.
    pub fn resources(
        &self,
        include_custom_pages: bool,
    ) -> impl Iterator<Item = &ContentRecord> + '_ {
        let custom_pages: &[ContentRecord] = if include_custom_pages {
            self.collection(Collection::CustomPages)
        } else {
            &[]
        };

        Collection::BASE
            .iter()
            .flat_map(move |c| self.collection(*c).iter())
            .chain(custom_pages.iter())
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn record(mut self, record: ContentRecord) -> Self {
        self.catalog.collections[record.collection.index()].push(record);
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
