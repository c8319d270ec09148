//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; actor logs carry an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run -p comanda     # lifecycle steps
//! RUST_LOG=debug cargo run -p comanda    # plus every request payload
//! ```
//!
//! With `RUST_LOG=info`, placing and cooking an order reads like:
//!
//! ```text
//! INFO Created entity_type="Notification" id=notif_1 size=1
//! INFO Order placed order_id=order_1 table=4 total=20.00 status=payment_validated
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Order transition order_id=order_1 from=payment_validated to=preparing event=ItemStarted { index: 0 }
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
