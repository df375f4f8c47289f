// core/src/catalog/filter.rs
use super::product::Product;
use super::store::Catalog;

/// Display label of the "every category" entry. Also accepted when parsing a filter.
pub const ALL_CATEGORIES_LABEL: &str = "Todos";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
  #[default]
  All,
  Named(String),
}

impl CategoryFilter {
  /// `None`, an empty string and the "all" label select every category.
  pub fn parse(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      None | Some("") => CategoryFilter::All,
      Some(label) if label == ALL_CATEGORIES_LABEL => CategoryFilter::All,
      Some(label) => CategoryFilter::Named(label.to_string()),
    }
  }

  pub fn label(&self) -> &str {
    match self {
      CategoryFilter::All => ALL_CATEGORIES_LABEL,
      CategoryFilter::Named(name) => name,
    }
  }

  fn admits(&self, product: &Product) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Named(name) => product.category == *name,
    }
  }
}

/// Free-text query plus a single category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
  pub query: String,
  pub category: CategoryFilter,
}

impl CatalogFilter {
  pub fn new(query: impl Into<String>, category: CategoryFilter) -> Self {
    Self {
      query: query.into(),
      category,
    }
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.category.admits(product) && product.mentions(&self.query.to_lowercase())
  }

  /// Products passing the filter, in catalog order. Recomputed on every call.
  pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
    catalog.products().iter().filter(|p| self.matches(p)).collect()
  }
}
