use anyhow::Result;
use chrono::NaiveDate;
use comanda::lifecycle::tracing::setup_tracing;
use comanda::lifecycle::{RestaurantSystem, SystemConfig};
use comanda::model::{
    EmployeeCreate, MenuItemCreate, OrderCreate, OrderItemInput, PaymentMethod, Role, TableCreate,
};
use rust_decimal::Decimal;
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let config = SystemConfig::from_env();
    let delay = config.delivery_delay;
    let system = RestaurantSystem::with_config(config);

    // Floor setup
    let (table_id, waiter_id, ceviche, chicha) = async {
        let table_id = system
            .tables
            .add_table(TableCreate {
                number: 4,
                capacity: 4,
                qr_code: Some("QR-T4".into()),
            })
            .await?;
        let waiter_id = system
            .employees
            .hire(EmployeeCreate {
                name: "Rosa Quispe".into(),
                role: Role::Waiter,
                email: "rosa@comanda.pe".into(),
                phone: None,
                hired_on: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
                shift: Some("evening".into()),
            })
            .await?;
        system.employees.set_online(waiter_id.clone(), true).await?;

        let ceviche = system
            .menu
            .add_item(MenuItemCreate {
                name: "Ceviche".into(),
                description: "Sea bass cured in lime".into(),
                price: Decimal::new(3500, 2),
                category: "mains".into(),
                ingredients: vec!["sea bass".into(), "lime".into(), "onion".into()],
                prep_minutes: 15,
            })
            .await?;
        let chicha = system
            .menu
            .add_item(MenuItemCreate {
                name: "Chicha morada".into(),
                description: "Purple corn drink".into(),
                price: Decimal::new(800, 2),
                category: "drinks".into(),
                ingredients: vec!["purple corn".into(), "pineapple".into()],
                prep_minutes: 2,
            })
            .await?;
        anyhow::Ok((table_id, waiter_id, ceviche, chicha))
    }
    .instrument(info_span!("floor_setup"))
    .await?;

    // A cash order from table 4
    let order_id = async {
        let order_id = system
            .orders
            .place_order(OrderCreate {
                table_id: table_id.clone(),
                customer_id: "guest_t4".into(),
                items: vec![
                    OrderItemInput::new(ceviche, 1).with_note("extra spicy"),
                    OrderItemInput::new(chicha, 2),
                ],
                payment_method: PaymentMethod::Cash,
                note: None,
            })
            .await?;

        system.validate_cash_payment(order_id.clone()).await?;
        for index in 0..2 {
            system.orders.start_item(order_id.clone(), index).await?;
        }
        for index in 0..2 {
            system.orders.complete_item(order_id.clone(), index).await?;
        }
        system.dispatch_courier(order_id.clone()).await?;
        anyhow::Ok(order_id)
    }
    .instrument(info_span!("order_processing"))
    .await?;

    tokio::time::sleep(delay + std::time::Duration::from_millis(100)).await;

    let order = system.orders.fetch(order_id.clone()).await?;
    info!(%order_id, status = %order.status, total = %order.total, "Order finished");
    system.orders.close_bill(order_id).await?;

    for role in [Role::Kitchen, Role::Waiter, Role::Admin, Role::Customer] {
        let unread = system.notifications.unread_for_role(role).await?;
        info!(%role, unread = unread.len(), "Notifications");
    }
    let waiting = system.orders.active_for_waiter(waiter_id).await?;
    info!(active = waiting.len(), "Orders still on the waiter's list");

    let stats = system.daily_stats().await?;
    info!(
        sales = stats.sales_today,
        revenue = %stats.revenue_today,
        occupied_tables = stats.occupied_tables,
        "Daily stats"
    );

    system.shutdown().await?;
    Ok(())
}
