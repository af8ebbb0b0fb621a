use serde::{Deserialize, Serialize};

use crate::grid::{CellValue, Record};

/// Catalog article.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub code: String,
    pub name: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub min_profit: f64,
    pub max_profit: f64,
    pub price: f64,
    pub is_promotion: bool,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub group_id: String,
}

impl Record for Article {
    fn value(&self, key: &str) -> CellValue {
        match key {
            "id" => (&self.id).into(),
            "code" => (&self.code).into(),
            "name" => (&self.name).into(),
            "colors" => self.colors.as_slice().into(),
            "sizes" => self.sizes.as_slice().into(),
            "minProfit" => self.min_profit.into(),
            "maxProfit" => self.max_profit.into(),
            "price" => self.price.into(),
            "isPromotion" => self.is_promotion.into(),
            "isActive" => self.is_active.into(),
            "image" => self.image.clone().into(),
            "description" => self.description.clone().into(),
            "groupId" => (&self.group_id).into(),
            _ => CellValue::Empty,
        }
    }

    fn fields(&self) -> Vec<CellValue> {
        [
            "id",
            "code",
            "name",
            "colors",
            "sizes",
            "minProfit",
            "maxProfit",
            "price",
            "isPromotion",
            "isActive",
            "image",
            "description",
            "groupId",
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
    fn test_camel_case_keys() {
        let json = r#"{
            "id": "a1", "code": "CAM-01", "name": "Camisa",
            "colors": ["rojo", "azul"], "sizes": ["M"],
            "minProfit": 10, "maxProfit": 30, "price": 24.5,
            "isPromotion": false, "isActive": true, "groupId": "g1"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.value("price"), CellValue::Number(24.5));
        assert_eq!(article.value("colors").join(", "), "rojo, azul");
        assert_eq!(article.value("isActive"), CellValue::Bool(true));
        assert!(article.value("description").is_empty());
    }
}
