//! Field names of the vehicle resale dataset, shown to help phrase queries.

use crate::render::{Column, TableBlock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: &'static str,
    pub description: &'static str,
}

const fn mapping(name: &'static str, description: &'static str) -> ColumnMapping {
    ColumnMapping { name, description }
}

pub const COLUMN_MAPPINGS: &[ColumnMapping] = &[
    mapping(
        "State",
        "The Indian state where the vehicle is registered (e.g., Karnataka, Rajasthan, Madhya Pradesh).",
    ),
    mapping(
        "Avg Daily Distance (km)",
        "Average distance driven per day in kilometers (e.g., 68.84, 23.8).",
    ),
    mapping(
        "Brand",
        "The manufacturer or brand of the vehicle (e.g., Royal Enfield, Bajaj, KTM).",
    ),
    mapping(
        "Model",
        "Specific model name of the vehicle (e.g., Hunter 350, Dominar 400, 125 Duke).",
    ),
    mapping(
        "Price (INR)",
        "Original purchase price of the vehicle in Indian Rupees (e.g., 252816, 131100).",
    ),
    mapping(
        "Year of Manufacture",
        "The year the vehicle was manufactured (e.g., 2019, 2020, 2021).",
    ),
    mapping(
        "Engine Capacity (cc)",
        "Engine capacity in cubic centimeters (e.g., 672, 769, 216).",
    ),
    mapping(
        "Fuel Type",
        "Type of fuel used by the vehicle (e.g., Electric, Hybrid, Petrol).",
    ),
    mapping(
        "Mileage (km/l)",
        "Fuel efficiency measured in kilometers per liter (e.g., 78.41, 89.98).",
    ),
    mapping(
        "Owner Type",
        "Indicates the ownership count such as First Owner, Second Owner, Third Owner (e.g., Second, Third).",
    ),
    mapping(
        "Registration Year",
        "Year the vehicle was registered with the RTO (e.g., 2019, 2021, 2024).",
    ),
    mapping(
        "Insurance Status",
        "Current insurance status of the vehicle (e.g., Active, Not Available).",
    ),
    mapping(
        "Seller Type",
        "Indicates whether the seller is the first-hand, second-hand, or third-hand owner (e.g., Individual, Dealer).",
    ),
    mapping(
        "Resale Price (INR)",
        "Expected or actual resale value in Indian Rupees (e.g., 149934.18, 66960.3).",
    ),
    mapping(
        "City Tier",
        "Tier classification of the city where the vehicle is sold: Tier 1 (metro), Tier 2 (semi-urban), Tier 3 (rural/small towns).",
    ),
];

/// The mapping list as a two-column table. Descriptions are not formatted.
pub fn reference_table(mappings: &[ColumnMapping]) -> TableBlock {
    let columns = vec![
        Column::new("name", "Field Name"),
        Column::new("description", "Field Description"),
    ];
    let rows = mappings
        .iter()
        .map(|m| vec![m.name.to_string(), m.description.to_string()])
        .collect();
    TableBlock::new(columns, rows)
}
