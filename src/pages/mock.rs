//! In-memory records standing in for the domain backend.

use erp_core::{Article, Branch, Company, Purchase, PurchaseItem, Role, User};

pub fn company() -> Company {
    Company {
        id: "1".to_string(),
        type_id: "1".to_string(),
        identification: "20123456789".to_string(),
        name: "Comercial Andina S.A.C.".to_string(),
        address: "Av. Principal 123, Lima".to_string(),
        phone: "+51 1 555 0100".to_string(),
        email: "contacto@andina.example.com".to_string(),
    }
}

fn admin() -> Role {
    Role {
        id: "1".to_string(),
        code: "ADMIN".to_string(),
        name: "Administrator".to_string(),
    }
}

fn seller() -> Role {
    Role {
        id: "2".to_string(),
        code: "SELLER".to_string(),
        name: "Vendedor".to_string(),
    }
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            username: "johndoe".to_string(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=John".to_string()),
            branches: vec![Branch::new("1", "Main Branch")],
            roles: vec![admin()],
        },
        User {
            id: "2".to_string(),
            name: "María Quispe".to_string(),
            email: "maria@example.com".to_string(),
            username: "mquispe".to_string(),
            avatar: None,
            branches: vec![Branch::new("1", "Main Branch"), Branch::new("2", "Sucursal Norte")],
            roles: vec![seller()],
        },
        User {
            id: "3".to_string(),
            name: "Carlos Ramos".to_string(),
            email: "carlos@example.com".to_string(),
            username: "cramos".to_string(),
            avatar: None,
            branches: vec![Branch::new("2", "Sucursal Norte")],
            roles: vec![admin(), seller()],
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            code: "POL-001".to_string(),
            name: "Polo básico".to_string(),
            colors: vec!["Blanco".to_string(), "Negro".to_string()],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            min_profit: 20.0,
            max_profit: 35.0,
            price: 39.9,
            is_promotion: false,
            is_active: true,
            image: None,
            description: Some("Algodón peinado".to_string()),
            group_id: "1".to_string(),
        },
        Article {
            id: "2".to_string(),
            code: "JEA-014".to_string(),
            name: "Jean clásico".to_string(),
            colors: vec!["Azul".to_string()],
            sizes: vec!["28".to_string(), "30".to_string(), "32".to_string()],
            min_profit: 25.0,
            max_profit: 40.0,
            price: 119.0,
            is_promotion: true,
            is_active: true,
            image: None,
            description: None,
            group_id: "2".to_string(),
        },
        Article {
            id: "3".to_string(),
            code: "CAS-007".to_string(),
            name: "Casaca impermeable".to_string(),
            colors: vec!["Verde".to_string(), "Gris".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            min_profit: 30.0,
            max_profit: 45.0,
            price: 249.5,
            is_promotion: false,
            is_active: false,
            image: None,
            description: Some("Temporada pasada".to_string()),
            group_id: "3".to_string(),
        },
    ]
}

fn item(id: &str, article_id: &str, description: &str, quantity: f64, price: f64) -> PurchaseItem {
    PurchaseItem {
        id: id.to_string(),
        article_id: article_id.to_string(),
        description: description.to_string(),
        tax_rate: 18.0,
        purchase_price: price,
        sale_price: price * 1.3,
        discount_rate: 0.0,
        quantity,
        subtotal: quantity * price,
    }
}

pub fn purchases() -> Vec<Purchase> {
    vec![
        Purchase {
            id: "1".to_string(),
            code: "C-0001".to_string(),
            date: "2024-03-02".to_string(),
            invoice: "F001-000231".to_string(),
            supplier_id: "10".to_string(),
            subtotal: 600.0,
            discount: 0.0,
            tax: 108.0,
            total: 708.0,
            items: vec![
                item("1", "1", "Polo básico", 20.0, 18.0),
                item("2", "2", "Jean clásico", 4.0, 60.0),
            ],
        },
        Purchase {
            id: "2".to_string(),
            code: "C-0002".to_string(),
            date: "2024-02-15".to_string(),
            invoice: "F002-001877".to_string(),
            supplier_id: "11".to_string(),
            subtotal: 1250.0,
            discount: 50.0,
            tax: 216.0,
            total: 1416.0,
            items: vec![item("3", "3", "Casaca impermeable", 10.0, 125.0)],
        },
    ]
}
