use serde::{Deserialize, Serialize};

/// The organization operating the console.
///
/// Unlike the other records, the backend sends `type_id` in snake case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub type_id: String,
    /// Tax identification number.
    pub identification: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": "1",
            "type_id": "6",
            "identification": "20123456789",
            "name": "Comercial Andina",
            "address": "Av. Principal 123",
            "phone": "555-0100",
            "email": "contacto@andina.pe"
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.type_id, "6");
        assert_eq!(company.identification, "20123456789");

        let back = serde_json::to_value(&company).unwrap();
        assert_eq!(back["type_id"], "6");
    }
}
