//! Starter catalogue used when a slot has no stored data.
//!
//! Journal-like collections (entries, devices, breaks, stash) seed empty;
//! only the product catalogue and the location lists ship starter rows.

use crate::model::location::{Pharmacy, Surgery};
use crate::model::product::{Product, StrainType, TerpeneProfile};

/// Built-in product catalogue shown on first run.
pub fn initial_products() -> Vec<Product> {
    vec![
        Product {
            id: "prod-noidecs-t20".to_string(),
            name: "Noidecs T20 Zour Apples".to_string(),
            producer: "Noidecs".to_string(),
            logo_url: String::new(),
            kind: StrainType::Hybrid,
            thc: 20.0,
            cbd: 1.0,
            terpenes: vec![
                TerpeneProfile {
                    name: "Limonene".to_string(),
                    percentage: 0.8,
                    description: Some("Citrus forward".to_string()),
                },
                TerpeneProfile {
                    name: "Myrcene".to_string(),
                    percentage: 0.5,
                    description: None,
                },
            ],
            effects: vec!["Uplifted".to_string(), "Focused".to_string()],
            description: "Balanced hybrid flower with a sharp apple nose.".to_string(),
            image_url: String::new(),
            price_per_gram: Some(7.5),
        },
        Product {
            id: "prod-adven-cura9".to_string(),
            name: "Adven Cura-9 Indica".to_string(),
            producer: "Adven".to_string(),
            logo_url: String::new(),
            kind: StrainType::Indica,
            thc: 18.0,
            cbd: 0.5,
            terpenes: vec![TerpeneProfile {
                name: "Caryophyllene".to_string(),
                percentage: 0.6,
                description: None,
            }],
            effects: vec!["Relaxed".to_string(), "Sleepy".to_string()],
            description: "Evening indica flower, heavier body effect.".to_string(),
            image_url: String::new(),
            price_per_gram: Some(6.0),
        },
        Product {
            id: "prod-sativa-oil-10".to_string(),
            name: "Daytime Sativa Oil 10:1".to_string(),
            producer: "Curaleaf".to_string(),
            logo_url: String::new(),
            kind: StrainType::Sativa,
            thc: 10.0,
            cbd: 1.0,
            terpenes: Vec::new(),
            effects: vec!["Clear-headed".to_string()],
            description: "Low-strength oral oil for daytime dosing.".to_string(),
            image_url: String::new(),
            price_per_gram: None,
        },
    ]
}

/// Built-in prescribing clinics shown on first run.
pub fn initial_surgeries() -> Vec<Surgery> {
    vec![
        Surgery {
            id: "surgery-city-clinic".to_string(),
            name: "City Cannabis Clinic".to_string(),
            address: Some("12 Harley Street, London".to_string()),
            notes: None,
        },
        Surgery {
            id: "surgery-northern-pain".to_string(),
            name: "Northern Pain & Wellness".to_string(),
            address: Some("4 Deansgate, Manchester".to_string()),
            notes: Some("Telephone follow-ups only".to_string()),
        },
    ]
}

/// Built-in dispensing pharmacies shown on first run.
pub fn initial_pharmacies() -> Vec<Pharmacy> {
    vec![
        Pharmacy {
            id: "pharmacy-dispensary-uk".to_string(),
            name: "Dispensary UK".to_string(),
            address: Some("Unit 3, Milton Keynes".to_string()),
            notes: None,
        },
        Pharmacy {
            id: "pharmacy-st-annes".to_string(),
            name: "St Anne's Specialist Pharmacy".to_string(),
            address: Some("88 Queensway, Birmingham".to_string()),
            notes: None,
        },
    ]
}
