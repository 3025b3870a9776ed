//! Demo floor layout
//!
//! Two floors of halls the dashboard starts from on a fresh install.

use rust_decimal::Decimal;
use shared::models::{DiningTableCreate, HallCreate, Order, OrderItem, TableStatus};

use super::service::FloorService;
use crate::utils::AppResult;

struct SeedHall {
    name: &'static str,
    floor: u8,
    tables: &'static [(&'static str, u8, TableStatus)],
}

const DEMO_HALLS: &[SeedHall] = &[
    SeedHall {
        name: "سالن اصلی",
        floor: 1,
        tables: &[
            ("میز ۱", 4, TableStatus::Empty),
            ("میز ۲", 2, TableStatus::Occupied),
            ("میز ۳", 6, TableStatus::Reserved),
            ("میز ۴", 4, TableStatus::Paid),
        ],
    },
    SeedHall {
        name: "تراس",
        floor: 1,
        tables: &[
            ("تراس ۱", 2, TableStatus::Empty),
            ("تراس ۲", 4, TableStatus::Empty),
        ],
    },
    SeedHall {
        name: "سالن VIP",
        floor: 2,
        tables: &[
            ("VIP ۱", 8, TableStatus::Reserved),
            ("VIP ۲", 6, TableStatus::Empty),
        ],
    },
];

/// Order served at the first occupied demo table
fn demo_order() -> AppResult<Order> {
    Order::new(vec![
        OrderItem::new("قهوه اسپرسو", 2, Decimal::new(85_000, 0)),
        OrderItem::new("کیک شکلاتی", 1, Decimal::new(120_000, 0)),
    ])
}

/// Populate an empty floor service with the demo halls.
///
/// Goes through the public operations, so subscribers see the usual
/// created/updated events. Returns the number of tables added.
pub fn demo_halls(floor: &FloorService) -> AppResult<usize> {
    let mut added = 0;
    for seed in DEMO_HALLS {
        let hall = floor.add_hall(HallCreate {
            name: seed.name.to_string(),
            floor: seed.floor,
        })?;
        for &(name, capacity, status) in seed.tables {
            let table = floor.add_table(DiningTableCreate {
                hall_id: hall.id.clone(),
                name: name.to_string(),
                capacity,
                status: TableStatus::Empty,
            })?;
            match status {
                TableStatus::Occupied => {
                    floor.seat_with_order(&table.id, demo_order()?)?;
                }
                TableStatus::Paid => {
                    // follow the service flow so a strict policy accepts it
                    floor.seat_with_order(&table.id, demo_order()?)?;
                    floor.set_table_status(&table.id, TableStatus::Paid)?;
                }
                TableStatus::Reserved => {
                    floor.set_table_status(&table.id, TableStatus::Reserved)?;
                }
                TableStatus::Empty => {}
            }
            added += 1;
        }
    }
    tracing::info!(halls = DEMO_HALLS.len(), tables = added, "Demo floor seeded");
    Ok(added)
}
