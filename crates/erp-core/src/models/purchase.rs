use serde::{Deserialize, Serialize};

use crate::grid::{CellValue, Record};

/// Supplier invoice. Amounts are carried as entered; `subtotal` and `total`
/// are not reconciled against `items`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub code: String,
    /// ISO date (`YYYY-MM-DD`), so lexicographic order is chronological.
    pub date: String,
    pub invoice: String,
    pub supplier_id: String,
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<PurchaseItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseItem {
    pub id: String,
    pub article_id: String,
    pub description: String,
    pub tax_rate: f64,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub discount_rate: f64,
    pub quantity: f64,
    pub subtotal: f64,
}

impl Purchase {
    pub fn item_descriptions(&self) -> Vec<String> {
        self.items.iter().map(|i| i.description.clone()).collect()
    }
}

impl Record for Purchase {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => (&self.id).into(),
            "code" => (&self.code).into(),
            "date" => (&self.date).into(),
            "invoice" => (&self.invoice).into(),
            "supplierId" => (&self.supplier_id).into(),
            "subtotal" => self.subtotal.into(),
            "discount" => self.discount.into(),
            "tax" => self.tax.into(),
            "total" => self.total.into(),
            "items" => self.item_descriptions().into(),
            _ => CellValue::Empty,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        [
            "id",
            "code",
            "date",
            "invoice",
            "supplierId",
            "subtotal",
            "discount",
            "tax",
            "total",
            "items",
        ]
        .iter()
        .map(|key| self.value(key))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_are_searchable_by_description() {
        let purchase = Purchase {
            id: "p1".to_string(),
            code: "C-0001".to_string(),
            date: "2024-03-01".to_string(),
            invoice: "001-001-000123".to_string(),
            supplier_id: "s1".to_string(),
            subtotal: 100.0,
            discount: 0.0,
            tax: 15.0,
            total: 115.0,
            items: vec![PurchaseItem {
                id: "i1".to_string(),
                article_id: "a1".to_string(),
                description: "Camisa azul".to_string(),
                tax_rate: 15.0,
                purchase_price: 10.0,
                sale_price: 18.0,
                discount_rate: 0.0,
                quantity: 10.0,
                subtotal: 100.0,
            }],
        };
        assert!(
            purchase
                .fields()
                .iter()
                .any(|v| v.contains_lowercase("camisa"))
        );
        assert_eq!(purchase.value("total").to_string(), "115");
    }
}
