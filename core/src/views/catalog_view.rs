// core/src/views/catalog_view.rs
use crate::cart::CartHandle;
use crate::catalog::{Catalog, CatalogFilter, CategoryFilter, Product, ALL_CATEGORIES_LABEL};
use crate::notification::Notification;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogViewModel<'a> {
  pub query: &'a str,
  pub selected_category: &'a str,
  /// The "all" label first, then catalog categories in first-seen order.
  pub categories: Vec<&'a str>,
  pub products: Vec<&'a Product>,
  pub results_label: String,
  pub is_empty: bool,
}

/// The product listing with its search box and category chips.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
  catalog: &'a Catalog,
  filter: CatalogFilter,
}

impl<'a> CatalogView<'a> {
  pub fn new(catalog: &'a Catalog) -> Self {
    Self {
      catalog,
      filter: CatalogFilter::default(),
    }
  }

  pub fn with_filter(catalog: &'a Catalog, filter: CatalogFilter) -> Self {
    Self { catalog, filter }
  }

  pub fn filter(&self) -> &CatalogFilter {
    &self.filter
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    self.filter.query = query.into();
  }

  pub fn select_category(&mut self, category: CategoryFilter) {
    self.filter.category = category;
  }

  pub fn reset_filters(&mut self) {
    self.filter = CatalogFilter::default();
  }

  pub fn categories(&self) -> Vec<&'a str> {
    let mut categories = vec![ALL_CATEGORIES_LABEL];
    categories.extend(self.catalog.categories());
    categories
  }

  pub fn visible_products(&self) -> Vec<&'a Product> {
    self.filter.apply(self.catalog)
  }

  /// Quick add from a product card: one unit, no quantity selector.
  pub fn add_to_cart(&self, cart: &CartHandle, product: &Product) -> Notification {
    cart.update(|c| c.add_to_cart(product, 1));
    Notification::product_added(&product.name)
  }

  pub fn render(&self) -> CatalogViewModel<'_> {
    let products = self.visible_products();
    debug!(
      query = %self.filter.query,
      category = %self.filter.category.label(),
      matches = products.len(),
      "Catalog view rendered."
    );
    CatalogViewModel {
      query: &self.filter.query,
      selected_category: self.filter.category.label(),
      categories: self.categories(),
      results_label: results_label(products.len()),
      is_empty: products.is_empty(),
      products,
    }
  }
}

pub fn results_label(count: usize) -> String {
  if count == 1 {
    "1 produto encontrado".to_string()
  } else {
    format!("{} produtos encontrados", count)
  }
}
